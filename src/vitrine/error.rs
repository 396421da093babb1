use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("An item with id {0} already exists")]
    DuplicateId(String),

    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    InvalidFilter {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VitrineError>;
