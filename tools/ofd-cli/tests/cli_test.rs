//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn ofd_cmd() -> Command {
    Command::cargo_bin("ofd").unwrap()
}

mod canonicalize {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.json");
        fs::write(&file, r#"{"z": 1, "a": null}"#).unwrap();

        ofd_cmd()
            .arg("canonicalize")
            .arg(&file)
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"a":"","z":1}"#));
    }

    #[test]
    fn test_canonicalize_nonexistent_file() {
        ofd_cmd()
            .arg("canonicalize")
            .arg("nonexistent.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read file"));
    }

    #[test]
    fn test_canonicalize_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.json");
        fs::write(&file, "{ not json }").unwrap();

        ofd_cmd().arg("canonicalize").arg(&file).assert().failure();
    }
}

mod sign {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.json");
        fs::write(&file, r#"{"a": null}"#).unwrap();

        ofd_cmd()
            .arg("sign")
            .arg(&file)
            .arg("--secret")
            .arg("secret")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "935295809f5fc1dc6fa0d373462f6aee",
            ));
    }

    #[test]
    fn test_sign_requires_secret() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.json");
        fs::write(&file, "{}").unwrap();

        ofd_cmd().arg("sign").arg(&file).assert().failure();
    }
}

mod nonce {
    use super::*;

    #[test]
    fn test_nonce_has_salt_prefix() {
        ofd_cmd()
            .arg("nonce")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("salt_"));
    }
}

mod send {
    use super::*;

    #[test]
    fn test_send_without_credentials_fails() {
        ofd_cmd()
            .arg("send")
            .arg("POST")
            .arg("documents")
            .arg("--base-url")
            .arg("http://127.0.0.1:1/v1/")
            .env_remove("OFD_TOKEN")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no credentials"));
    }

    #[test]
    fn test_send_rejects_unknown_method() {
        ofd_cmd()
            .arg("send")
            .arg("PATCH")
            .arg("documents")
            .arg("--base-url")
            .arg("http://127.0.0.1:1/v1/")
            .arg("--token")
            .arg("t")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported HTTP method"));
    }
}
