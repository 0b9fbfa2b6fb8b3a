//! Configuration errors.

use thiserror::Error;

/// Errors raised while assembling a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingToken(&'static str),

    #[error("operation requires app_id/secret_key credentials")]
    AppSecretRequired,
}
