//! Client error taxonomy.

use crate::transport::TransportError;
use ofd_core::ConfigError;
use ofd_sign::CanonicalError;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors surfaced by the client facade.
///
/// Transport and decode failures propagate as-is; the one-shot 401 retry is
/// the only locally recovered condition. No partial results are returned.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to decode response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service rejected the token twice in a row (401 after the retry).
    #[error("authorization token expired")]
    AuthExpired,

    /// 503 from the service; surfaced to the caller, never retried.
    #[error("service rate limited the request")]
    RateLimited,

    /// 500 from the service.
    #[error("internal server error: {body}")]
    Server { body: String },

    /// Any other non-200 status.
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error(transparent)]
    Canonical(#[from] CanonicalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Stable machine-readable code, `http:<status>` for HTTP failures.
    pub fn error_code(&self) -> String {
        match self {
            ClientError::Decode(_) => "decode".to_string(),
            ClientError::Transport(_) => "transport".to_string(),
            ClientError::AuthExpired => "http:401".to_string(),
            ClientError::RateLimited => "http:503".to_string(),
            ClientError::Server { .. } => "http:500".to_string(),
            ClientError::Http { status } => format!("http:{status}"),
            ClientError::Canonical(_) => "sign".to_string(),
            ClientError::Config(_) => "config".to_string(),
        }
    }

    /// The structured error value callers receive in place of a payload.
    pub fn error_body(&self) -> Value {
        json!({
            "status": "error",
            "error_code": self.error_code(),
            "message": self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_codes() {
        assert_eq!(ClientError::AuthExpired.error_code(), "http:401");
        assert_eq!(ClientError::RateLimited.error_code(), "http:503");
        assert_eq!(
            ClientError::Server { body: String::new() }.error_code(),
            "http:500"
        );
        assert_eq!(ClientError::Http { status: 404 }.error_code(), "http:404");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ClientError::Http { status: 418 }.error_body();
        assert_eq!(body["status"], "error");
        assert_eq!(body["error_code"], "http:418");
    }
}
