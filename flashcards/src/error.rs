// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("invalid number of questions: \"{0}\"")]
    InvalidCount(String),

    #[error("input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
