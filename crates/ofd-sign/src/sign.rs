//! MD5 request signatures.
//!
//! The open-api verifies a `sign` header computed as the MD5 of the request
//! parameters serialized to canonical JSON with the integration's secret key
//! appended. The signature binds the parameters (including the nonce) to the
//! shared secret; canonical serialization keeps it reproducible on both ends.

use crate::canonical::canonical_string;
use crate::error::CanonicalError;
use md5::{Digest, Md5};
use ofd_core::normalize_params;
use serde::Serialize;
use serde_json::Value;

/// Compute the request signature for a parameter mapping.
///
/// Parameters are normalized first (null leaves become empty strings), so
/// `sign_params({"a": null}, s)` equals `sign_params({"a": ""}, s)`. The
/// result is deterministic: the same parameters and secret always produce
/// the same signature.
///
/// # Errors
///
/// Returns `CanonicalError` if `params` cannot be converted to a JSON tree.
///
/// # Example
///
/// ```rust
/// use ofd_sign::sign_params;
///
/// let sign = sign_params(&serde_json::json!({"a": ""}), "secret").unwrap();
/// assert_eq!(sign, "935295809f5fc1dc6fa0d373462f6aee");
/// ```
pub fn sign_params<T: Serialize>(params: &T, secret: &str) -> Result<String, CanonicalError> {
    let tree = serde_json::to_value(params)?;
    let canonical = canonical_string(&normalize_params(&tree));
    Ok(sign_canonical(&canonical, secret))
}

/// Sign an already-canonical parameter string.
///
/// Used by servers (and test fixtures) that verify a signature against the
/// exact body bytes they received.
pub fn sign_canonical(canonical: &str, secret: &str) -> String {
    md5_hex(format!("{canonical}{secret}").as_bytes())
}

/// MD5 of raw bytes as a 32-character lowercase hex string.
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
