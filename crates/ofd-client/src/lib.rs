//! # OFD Client
//!
//! HTTP client facade for the OFD API and its open-api variant.
//!
//! This crate provides:
//! - A pluggable [`Transport`] trait with a reqwest implementation
//! - Status-code classification (success, expired token, rate limit, error)
//! - The [`OfdClient`] facade: build a signed request, dispatch it, retry
//!   exactly once on 401, and return either a decoded JSON mapping or a
//!   typed error
//! - The [`OpenApiClient`] command layer (session token, shift and check
//!   commands)
//!
//! ## Example
//!
//! ```ignore
//! use ofd_client::OfdClient;
//! use ofd_core::{ClientConfig, Method, OFD_TEST_BASE_URL};
//!
//! let config = ClientConfig::from_env(OFD_TEST_BASE_URL)?;
//! let client = OfdClient::new(config)?;
//!
//! let payload = client
//!     .request(Method::Post, "documents", serde_json::json!({
//!         "fiscalDriveNumber": "9999078902001864",
//!         "date": "2021-06-03",
//!     }))
//!     .await?;
//! ```

mod client;
mod commands;
mod error;
mod response;
mod transport;

pub use client::OfdClient;
pub use commands::{OpenApiClient, COMMAND_MODEL, STATE_SYSTEM_MODEL, TOKEN_MODEL};
pub use error::ClientError;
pub use response::{classify, decode_payload, Disposition};
pub use transport::{ReqwestTransport, Transport, TransportError};
