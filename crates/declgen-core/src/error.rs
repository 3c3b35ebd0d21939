use thiserror::Error;

/// Core error type for declgen operations.
#[derive(Error, Debug)]
pub enum DeclError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for DeclError {
    fn from(e: serde_json::Error) -> Self {
        DeclError::Serialization(e.to_string())
    }
}

/// Result type alias using DeclError.
pub type Result<T> = std::result::Result<T, DeclError>;
