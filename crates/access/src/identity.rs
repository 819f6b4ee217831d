//! The identity seam: who is asking, and what may they do.

use formpdf_types::UserId;

/// Resolves the requesting visitor's identity and capabilities.
///
/// Injected into the access chain so checks never reach for ambient session
/// state. `client_ip` is the address the request arrived from, compared
/// against the address recorded on the entry for anonymous ownership.
pub trait IdentityProvider {
    /// The authenticated user, if any.
    fn user_id(&self) -> Option<UserId>;

    /// The requesting client's IP address, as recorded at submission time.
    fn client_ip(&self) -> &str;

    /// Whether the current user holds a named capability.
    fn can(&self, capability: &str) -> bool;

    /// The login URL to redirect an anonymous visitor to, returning them to
    /// `redirect_to` afterwards.
    fn login_url(&self, redirect_to: &str) -> String;
}

/// A fixed identity, for embedding hosts with their own session handling and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    pub user_id: Option<UserId>,
    pub ip: String,
    pub capabilities: Vec<String>,
    pub login_base: String,
}

impl Visitor {
    /// An unauthenticated visitor at `ip`.
    pub fn anonymous(ip: impl Into<String>) -> Self {
        Self {
            user_id: None,
            ip: ip.into(),
            capabilities: Vec::new(),
            login_base: String::new(),
        }
    }

    /// An authenticated user with no extra capabilities.
    pub fn logged_in(user_id: UserId, ip: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            ip: ip.into(),
            capabilities: Vec::new(),
            login_base: String::new(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    pub fn with_login_base(mut self, base: impl Into<String>) -> Self {
        self.login_base = base.into();
        self
    }
}

impl IdentityProvider for Visitor {
    fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    fn client_ip(&self) -> &str {
        &self.ip
    }

    fn can(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }

    fn login_url(&self, redirect_to: &str) -> String {
        if self.login_base.is_empty() {
            format!("/login?redirect_to={redirect_to}")
        } else {
            format!("{}?redirect_to={redirect_to}", self.login_base)
        }
    }
}
