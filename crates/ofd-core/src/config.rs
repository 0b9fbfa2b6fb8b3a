//! Client configuration and credentials.
//!
//! Credentials are always injected: either an API token (sent in the
//! `Ofdapitoken` header) or an app id/secret pair used to sign each request.
//! Nothing here is compiled in; the token can also be sourced from the
//! `OFD_TOKEN` environment variable.

use crate::error::ConfigError;
use std::time::Duration;

/// Environment variable supplying the bearer-style API token.
pub const OFD_TOKEN_ENV: &str = "OFD_TOKEN";

/// Base URL of the test OFD service.
pub const OFD_TEST_BASE_URL: &str = "https://testapi.ofd-ya.ru/ofdapi/v1/";

/// Base URL of the stable OFD service.
pub const OFD_BASE_URL: &str = "https://api.ofd-ya.ru/ofdapi/v1/";

/// Base URL of the test open-api service.
pub const OPEN_API_TEST_BASE_URL: &str = "https://check-dev.business.ru/open-api/v1/";

/// Base URL of the stable open-api service.
pub const OPEN_API_BASE_URL: &str = "https://check.business.ru/open-api/v1/";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How a client authenticates against the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Long-lived token, sent as the `Ofdapitoken` header.
    ApiToken(String),
    /// Integration app id and secret key; each request carries a `sign`
    /// header with an MD5 signature over its parameters.
    AppSecret { app_id: String, secret_key: String },
}

/// Configuration of a single client instance.
///
/// Fixed for the lifetime of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    /// Transport-level connect timeout. There is no overall deadline;
    /// callers impose their own.
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default connect timeout.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Override the transport connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Token-credential configuration with the token taken from `OFD_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when the variable is unset or empty.
    pub fn from_env(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let token = std::env::var(OFD_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken(OFD_TOKEN_ENV))?;
        Ok(Self::new(base_url, Credentials::ApiToken(token)))
    }

    /// Absolute URL for a model path, tolerating slashes on either side.
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            model.trim_start_matches('/')
        )
    }
}
