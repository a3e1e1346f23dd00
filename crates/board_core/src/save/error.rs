//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize document: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("malformed document: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("no saved document at {path}")]
    NotFound { path: String },
}

impl SaveError {
    /// Whether retrying the same operation can plausibly succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::NotFound { .. } => true,
            SaveError::Serialization(_) => false,
            SaveError::Malformed(_) => false,
        }
    }
}
