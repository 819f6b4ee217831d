//! Denial reasons and the per-check decision type.

use thiserror::Error;

/// Why a request was refused. Each variant carries a stable machine code so
/// callers can branch without matching on message text.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AccessError {
    #[error("you do not have permission to view this document")]
    AccessDenied,

    #[error("the document is disabled by its conditional logic")]
    ConditionalLogic,

    #[error("the view window for this entry has expired")]
    TimeoutExpired,

    #[error("document configuration not found")]
    NotFound,

    #[error("`{0}` is not a valid document id")]
    InvalidPdfId(String),
}

impl AccessError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccessDenied => "access_denied",
            Self::ConditionalLogic => "conditional_logic",
            Self::TimeoutExpired => "timeout_expired",
            Self::NotFound => "not_found",
            Self::InvalidPdfId(_) => "invalid_pdf_id",
        }
    }
}

/// Outcome of one access check.
///
/// `Redirect` is an auth-flow signal (send the visitor to the login page and
/// come back), not an error; only `Deny` carries an [`AccessError`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Decision {
    Continue,
    Redirect(String),
    Deny(AccessError),
}

impl Decision {
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }
}
