use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Malformed dictionary line in {path}: {line:?}")]
    MalformedDictionary { path: String, line: String },

    #[error("Token {0:?} contains the dictionary separator and cannot be saved")]
    UnpersistableToken(String),

    #[error("Segmentation error: {0}")]
    Segmentation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpamError>;
