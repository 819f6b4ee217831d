//! The ordered access-check chain.

use crate::conditional::rules_met;
use crate::error::{AccessError, Decision};
use crate::identity::IdentityProvider;
use chrono::{DateTime, Utc};
use formpdf_types::{ConditionalLogic, Entry};

/// Default age, in minutes, after which anonymous visitors lose access to
/// their own entry.
pub const DEFAULT_TIMEOUT_MINUTES: i64 = 20;

/// Default capability required to view entries you do not own.
pub const DEFAULT_VIEW_CAPABILITY: &str = "gravityforms_view_entries";

/// The access-relevant slice of a document configuration plus the global
/// settings that gate it.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    /// Inactive configurations are never served.
    pub active: bool,
    /// Optional rule set that must enable the document for this entry.
    pub conditional_logic: Option<ConditionalLogic>,
    /// Site-wide switch: only logged-in users may download.
    pub restricted_to_admin: bool,
    /// Anonymous-owner view window, in minutes.
    pub timeout_minutes: i64,
    /// Capability that grants access to entries owned by others.
    pub required_capability: String,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            active: true,
            conditional_logic: None,
            restricted_to_admin: false,
            timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
            required_capability: DEFAULT_VIEW_CAPABILITY.to_string(),
        }
    }
}

/// Everything a check may consult. Identity and the clock are injected so the
/// chain never reads ambient state.
pub struct AccessContext<'a> {
    pub entry: &'a Entry,
    pub policy: &'a AccessPolicy,
    pub identity: &'a dyn IdentityProvider,
    /// The URL being requested, used as the post-login redirect target.
    pub request_url: &'a str,
    pub now: DateTime<Utc>,
}

impl AccessContext<'_> {
    fn authenticated(&self) -> bool {
        self.identity.user_id().is_some()
    }

    /// Owner by user id when authenticated, by submission IP otherwise.
    fn is_owner(&self) -> bool {
        match self.identity.user_id() {
            Some(user) => self.entry.created_by == Some(user),
            None => !self.entry.ip.is_empty() && self.identity.client_ip() == self.entry.ip,
        }
    }
}

/// One link in the chain.
pub trait AccessCheck {
    fn name(&self) -> &'static str;
    fn check(&self, ctx: &AccessContext<'_>) -> Decision;
}

/// Inactive configurations fail before anything else is consulted.
pub struct ActiveCheck;

impl AccessCheck for ActiveCheck {
    fn name(&self) -> &'static str {
        "active"
    }

    fn check(&self, ctx: &AccessContext<'_>) -> Decision {
        if ctx.policy.active {
            Decision::Continue
        } else {
            Decision::Deny(AccessError::AccessDenied)
        }
    }
}

/// The document's own conditional logic must enable it for this entry.
pub struct ConditionalLogicCheck;

impl AccessCheck for ConditionalLogicCheck {
    fn name(&self) -> &'static str {
        "conditional_logic"
    }

    fn check(&self, ctx: &AccessContext<'_>) -> Decision {
        match &ctx.policy.conditional_logic {
            Some(logic) if !rules_met(logic, ctx.entry) => {
                Decision::Deny(AccessError::ConditionalLogic)
            }
            _ => Decision::Continue,
        }
    }
}

/// Site-wide "logged-in users only" switch; anonymous visitors are sent to
/// the login page rather than refused outright.
pub struct LoggedOutRestriction;

impl AccessCheck for LoggedOutRestriction {
    fn name(&self) -> &'static str {
        "logged_out_restriction"
    }

    fn check(&self, ctx: &AccessContext<'_>) -> Decision {
        if ctx.policy.restricted_to_admin && !ctx.authenticated() {
            Decision::Redirect(ctx.identity.login_url(ctx.request_url))
        } else {
            Decision::Continue
        }
    }
}

/// Anonymous owners only keep access for a limited window after submission.
pub struct LoggedOutTimeout;

impl AccessCheck for LoggedOutTimeout {
    fn name(&self) -> &'static str {
        "logged_out_timeout"
    }

    fn check(&self, ctx: &AccessContext<'_>) -> Decision {
        if ctx.authenticated() || !ctx.is_owner() {
            return Decision::Continue;
        }
        if ctx.entry.age_minutes(ctx.now) > ctx.policy.timeout_minutes {
            Decision::Deny(AccessError::TimeoutExpired)
        } else {
            Decision::Continue
        }
    }
}

/// Anonymous visitors who are not the IP-owner of the entry get a chance to
/// log in instead of a hard refusal.
pub struct LoggedOutOwnership;

impl AccessCheck for LoggedOutOwnership {
    fn name(&self) -> &'static str {
        "logged_out_ownership"
    }

    fn check(&self, ctx: &AccessContext<'_>) -> Decision {
        if !ctx.authenticated() && !ctx.is_owner() {
            Decision::Redirect(ctx.identity.login_url(ctx.request_url))
        } else {
            Decision::Continue
        }
    }
}

/// Authenticated users viewing entries they do not own need the configured
/// capability. Owners always pass.
pub struct CapabilityCheck;

impl AccessCheck for CapabilityCheck {
    fn name(&self) -> &'static str {
        "capability"
    }

    fn check(&self, ctx: &AccessContext<'_>) -> Decision {
        if !ctx.authenticated() || ctx.is_owner() {
            return Decision::Continue;
        }
        if ctx.identity.can(&ctx.policy.required_capability) {
            Decision::Continue
        } else {
            Decision::Deny(AccessError::AccessDenied)
        }
    }
}

/// The ordered chain. Evaluation short-circuits at the first non-`Continue`
/// decision.
pub struct AccessChain {
    checks: Vec<Box<dyn AccessCheck>>,
}

impl AccessChain {
    /// The standard order: active, conditional logic, logged-out restriction,
    /// logged-out timeout, logged-out ownership, capability.
    pub fn standard() -> Self {
        Self {
            checks: vec![
                Box::new(ActiveCheck),
                Box::new(ConditionalLogicCheck),
                Box::new(LoggedOutRestriction),
                Box::new(LoggedOutTimeout),
                Box::new(LoggedOutOwnership),
                Box::new(CapabilityCheck),
            ],
        }
    }

    pub fn evaluate(&self, ctx: &AccessContext<'_>) -> Decision {
        for check in &self.checks {
            let decision = check.check(ctx);
            if !decision.is_continue() {
                log::debug!("access check '{}' stopped the chain", check.name());
                return decision;
            }
        }
        Decision::Continue
    }
}
