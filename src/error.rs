use stone_layout::LayoutError;
use thiserror::Error;

/// Errors surfaced by the `stone` library and binary.
#[derive(Error, Debug)]
pub enum StoneError {
    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("Layout failed: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LayoutError> for StoneError {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::InvalidConfig(message) => StoneError::Config(message),
            other => StoneError::Layout(other.to_string()),
        }
    }
}
