use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF engine error: {0}")]
    Engine(String),
    #[error("malformed document: {0}")]
    Document(String),
    #[error("unsupported setting: {0}")]
    UnsupportedSetting(String),
    #[error("other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
