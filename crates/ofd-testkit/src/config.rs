//! Environment-specific credential files.
//!
//! Scenario suites keep one JSON file per environment (`dev.json`,
//! `stage.json`, ...) in a data directory, each holding the account name and
//! the integration credentials. The active environment is picked with a
//! CLI-style `--env <name>` argument.

use ofd_core::Credentials;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while locating or reading an environment config.
#[derive(Debug, Error)]
pub enum TestkitError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown environment '{name}', available: {available:?}")]
    UnknownEnv { name: String, available: Vec<String> },
}

/// Credentials for one test environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvConfig {
    pub account: String,
    pub app_id: String,
    pub secret_key: String,
}

impl EnvConfig {
    /// Load `<dir>/<env>.json`, validating `env` against the environments
    /// actually present in the directory.
    ///
    /// # Errors
    ///
    /// `UnknownEnv` when no such file exists, `Io`/`Parse` when it cannot be
    /// read or decoded.
    pub fn load(dir: &Path, env: &str) -> Result<Self, TestkitError> {
        let available = available_envs(dir)?;
        if !available.iter().any(|name| name == env) {
            return Err(TestkitError::UnknownEnv {
                name: env.to_string(),
                available,
            });
        }
        let raw = std::fs::read_to_string(dir.join(format!("{env}.json")))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// App-secret credentials for a [`ClientConfig`](ofd_core::ClientConfig).
    pub fn credentials(&self) -> Credentials {
        Credentials::AppSecret {
            app_id: self.app_id.clone(),
            secret_key: self.secret_key.clone(),
        }
    }
}

/// Environment names available in a config directory (`*.json` stems), sorted.
pub fn available_envs(dir: &Path) -> Result<Vec<String>, TestkitError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Extract the value following `--env` from a CLI-style argument list.
///
/// Returns `None` when the flag is absent or has no value.
///
/// # Example
///
/// ```rust
/// use ofd_testkit::select_env;
///
/// let args = ["run", "--env", "stage"].map(String::from);
/// assert_eq!(select_env(args), Some("stage".to_string()));
/// ```
pub fn select_env<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--env" {
            return args.next();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("dev.json"),
            r#"{"account": "acme-dev", "app_id": "app-1", "secret_key": "k1"}"#,
        )
        .expect("write dev");
        fs::write(
            dir.path().join("stage.json"),
            r#"{"account": "acme-stage", "app_id": "app-2", "secret_key": "k2"}"#,
        )
        .expect("write stage");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");
        dir
    }

    #[test]
    fn test_available_envs_lists_json_stems() {
        let dir = config_dir();
        assert_eq!(available_envs(dir.path()).unwrap(), vec!["dev", "stage"]);
    }

    #[test]
    fn test_load_selected_env() {
        let dir = config_dir();
        let config = EnvConfig::load(dir.path(), "stage").unwrap();
        assert_eq!(config.account, "acme-stage");
        assert_eq!(config.app_id, "app-2");
        assert_eq!(config.secret_key, "k2");
    }

    #[test]
    fn test_unknown_env_rejected() {
        let dir = config_dir();
        let err = EnvConfig::load(dir.path(), "prod").unwrap_err();
        match err {
            TestkitError::UnknownEnv { name, available } => {
                assert_eq!(name, "prod");
                assert_eq!(available, vec!["dev", "stage"]);
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("dev.json"), r#"{"account": "a"}"#).expect("write");
        let err = EnvConfig::load(dir.path(), "dev").unwrap_err();
        assert!(matches!(err, TestkitError::Parse(_)));
    }

    #[test]
    fn test_select_env_variants() {
        assert_eq!(
            select_env(["--env", "dev"].map(String::from)),
            Some("dev".to_string())
        );
        assert_eq!(
            select_env(["codecept", "run", "--env", "stage", "-v"].map(String::from)),
            Some("stage".to_string())
        );
        assert_eq!(select_env(["run"].map(String::from)), None);
        assert_eq!(select_env(["--env"].map(String::from)), None);
    }

    #[test]
    fn test_credentials_conversion() {
        let dir = config_dir();
        let config = EnvConfig::load(dir.path(), "dev").unwrap();
        assert_eq!(
            config.credentials(),
            Credentials::AppSecret {
                app_id: "app-1".into(),
                secret_key: "k1".into(),
            }
        );
    }
}
