//! # OFD Testkit
//!
//! Scenario-test harness for the OFD API SDK.
//!
//! This crate provides:
//! - Per-environment credential files selected with a `--env` argument
//! - [`ApiHarness`]: a client wrapper that stores the last response and
//!   exposes JSON assertion helpers
//!
//! The harness imposes nothing on the client beyond its public contract:
//! a decoded JSON mapping on success, a typed error otherwise.

mod config;
mod harness;

pub use config::{available_envs, select_env, EnvConfig, TestkitError};
pub use harness::{json_contains, ApiHarness};
