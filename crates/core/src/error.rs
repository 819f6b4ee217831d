//! The unified error type for pipeline operations.

use formpdf_access::AccessError;
use formpdf_render_core::RenderError;
use thiserror::Error;

/// The one message non-privileged users see when the PDF engine fails.
/// Engine diagnostics can leak paths and configuration, so they are reserved
/// for users holding the admin capability.
pub const GENERIC_RENDER_MESSAGE: &str =
    "The PDF could not be generated. Please try again or contact the site owner.";

/// The main error enum for all high-level pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("other pipeline error: {0}")]
    Other(String),
}

impl PipelineError {
    /// The message to show the requesting user. Engine failures surface
    /// verbatim only to privileged users; everyone else gets the fixed
    /// generic message. Other variants are safe to show as-is.
    pub fn user_message(&self, privileged: bool) -> String {
        match self {
            Self::Render(_) if !privileged => GENERIC_RENDER_MESSAGE.to_string(),
            Self::Render(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}
