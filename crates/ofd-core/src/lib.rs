//! # OFD Core
//!
//! Core types and parameter handling for the OFD API SDK.
//!
//! This crate provides:
//! - Request/response type definitions shared across the workspace
//! - Client configuration and credential variants
//! - Parameter normalization (null leaves become empty strings)
//! - PHP-compatible query-string encoding for GET requests
//!
//! ## Example
//!
//! ```rust
//! use ofd_core::{normalize_params, ClientConfig, Credentials};
//!
//! let config = ClientConfig::new(
//!     "https://testapi.ofd-ya.ru/ofdapi/v1/",
//!     Credentials::ApiToken("token".into()),
//! );
//! assert_eq!(config.endpoint("documents"), "https://testapi.ofd-ya.ru/ofdapi/v1/documents");
//!
//! let params = serde_json::json!({"kktRegId": null});
//! assert_eq!(normalize_params(&params), serde_json::json!({"kktRegId": ""}));
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod query;
pub mod types;

// Re-exports for convenience
pub use config::*;
pub use error::*;
pub use params::*;
pub use query::*;
pub use types::*;
