//! Per-request nonce generation.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Generates per-request unique nonces of the form `salt_<microseconds>`.
///
/// Uniqueness, not secrecy, is the requirement: the nonce distinguishes
/// otherwise identical commands on the service side. The generator bumps an
/// atomic high-water mark so that two calls in the same microsecond (or a
/// clock step backwards) still yield distinct values.
///
/// # Example
///
/// ```rust
/// use ofd_sign::NonceGenerator;
///
/// let nonces = NonceGenerator::new();
/// let first = nonces.next();
/// let second = nonces.next();
/// assert!(first.starts_with("salt_"));
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicI64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Issue the next nonce. Never returns the same value twice for one
    /// generator instance.
    pub fn next(&self) -> String {
        let now = Utc::now().timestamp_micros();
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        format!("salt_{}", now.max(prev + 1))
    }
}
