//! Error types for canonicalization and signing.

use thiserror::Error;

/// Errors that can occur while canonicalizing a value for signing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("JSON serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::SerializationError(err.to_string())
    }
}
