//! # OFD Sign
//!
//! Deterministic request signing for the OFD open-api.
//!
//! This crate provides:
//! - Canonical JSON serialization with sorted keys
//! - The MD5 request signature the service verifies (`sign` header)
//! - Per-request nonce generation
//!
//! ## Canonical JSON rules
//!
//! 1. Object keys sorted lexicographically by UTF-8 bytes
//! 2. Arrays preserve insertion order
//! 3. No whitespace
//! 4. Non-ASCII characters written as raw UTF-8, never `\u` escaped
//!
//! ## Example
//!
//! ```rust
//! use ofd_sign::{canonical_string, sign_params};
//!
//! let params = serde_json::json!({"nonce": "salt_100", "app_id": "app-1"});
//! assert_eq!(
//!     canonical_string(&params),
//!     r#"{"app_id":"app-1","nonce":"salt_100"}"#
//! );
//!
//! // Null leaves sign identically to empty strings.
//! let a = sign_params(&serde_json::json!({"a": null}), "secret").unwrap();
//! let b = sign_params(&serde_json::json!({"a": ""}), "secret").unwrap();
//! assert_eq!(a, b);
//! ```

mod canonical;
mod error;
mod nonce;
mod sign;

pub use canonical::*;
pub use error::*;
pub use nonce::*;
pub use sign::*;
