//! Shared request and response types for the OFD API SDK.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an HTTP method name the service does not support.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported HTTP method: '{0}'")]
pub struct UnsupportedMethod(pub String);

/// HTTP methods accepted by the OFD and open-api endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string instead of the body.
    pub fn is_query(&self) -> bool {
        matches!(self, Method::Get)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnsupportedMethod;

    /// Case-insensitive, matching the upper-casing the service applies.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(UnsupportedMethod(s.to_string())),
        }
    }
}

/// A fully built API request.
///
/// Immutable once built: the signature (when present) was computed over the
/// normalized `params` exactly as they will be serialized, and the nonce is
/// never reused by the issuing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: Method,
    /// Model path relative to the base URL, e.g. `documents` or `Command/42`.
    pub model: String,
    /// Normalized parameter mapping (null leaves already rewritten to `""`).
    pub params: Value,
    /// Per-request unique token, `salt_<microseconds>`.
    pub nonce: String,
    /// MD5 signature over the canonical params; present for app-secret credentials.
    pub sign: Option<String>,
}

/// The rendered wire form of a request, as handed to the transport.
///
/// The one-shot 401 retry re-sends this value verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A raw HTTP response: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}
