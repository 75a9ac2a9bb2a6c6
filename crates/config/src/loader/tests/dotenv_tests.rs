//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//! - Test that `.env` values feed the environment variable overlay.
//!
//! Invariants / Assumptions:
//! - Every test restores the variables it touches via `temp_env`.
//! - Tests are `#[serial]` because they mutate process-global state.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use crate::DynamicConfig;
use crate::error::ConfigError;
use crate::loader::ConfigLoader;
use crate::test_util::write_document;

const DOTENV_KEY: &str = "STRATA_DOTENV_SERVER_PORT";

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        let result = ConfigLoader::new(temp_dir.path()).load_dotenv_from(temp_dir.path().join(".env"));
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_valid_dotenv_sets_variables() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, format!("{DOTENV_KEY}=4000\n")).unwrap();

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), (DOTENV_KEY, None)],
        || {
            ConfigLoader::new(temp_dir.path())
                .load_dotenv_from(&env_path)
                .unwrap();
            assert_eq!(std::env::var(DOTENV_KEY).as_deref(), Ok("4000"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_values_feed_the_overlay() {
    let temp_dir = TempDir::new().unwrap();
    write_document(temp_dir.path(), "base", "server:\n  port: 80\n");
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, format!("{DOTENV_KEY}=4000\n")).unwrap();

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), (DOTENV_KEY, None)],
        || {
            let config: DynamicConfig = ConfigLoader::new(temp_dir.path())
                .with_env_prefix("STRATA_DOTENV")
                .load_dotenv_from(&env_path)
                .unwrap()
                .load()
                .unwrap();

            assert_eq!(
                config.get_path("server.port"),
                Some(&serde_yaml::Value::from(4000))
            );
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        let result = ConfigLoader::new(temp_dir.path()).load_dotenv_from(&env_path);

        match result {
            Err(ConfigError::DotenvParse { .. }) => {}
            Err(other) => panic!(
                "Invalid .env should return DotenvParse error, got {}",
                other
            ),
            Ok(_) => panic!("Invalid .env should return DotenvParse error, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    let secret_value = "supersecret_token_12345";
    fs::write(
        &env_path,
        format!("STRATA_DOTENV_SECRET={secret_value}\nINVALID_LINE_WITHOUT_EQUALS"),
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("STRATA_DOTENV_SECRET", None),
        ],
        || {
            let err = ConfigLoader::new(temp_dir.path())
                .load_dotenv_from(&env_path)
                .unwrap_err();

            let error_string = err.to_string();
            assert!(
                !error_string.contains(secret_value),
                "Error message should NOT contain the secret value: {}",
                error_string
            );
            assert!(
                error_string.contains("DOTENV_DISABLED"),
                "Error should hint about DOTENV_DISABLED: {}",
                error_string
            );
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_vars([("DOTENV_DISABLED", Some(value))], || {
            let result = ConfigLoader::new(temp_dir.path()).load_dotenv_from(&env_path);
            assert!(
                result.is_ok(),
                "DOTENV_DISABLED={value} should skip .env loading even if file is invalid"
            );
        });
    }
}
