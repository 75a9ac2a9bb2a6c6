//! Shared test utilities for strata CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write configuration directories for a test.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Returns a hermetic `strata` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `STRATA_*` variables from the host do not leak into the test.
pub fn strata_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("strata");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("STRATA_CONFIG_DIR")
        .env_remove("STRATA_ENV")
        .env_remove("STRATA_ENV_PREFIX")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `base.yaml` and `prod.yaml` into a fresh temporary directory.
pub fn configuration_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_document(
        temp_dir.path(),
        "base",
        "server:\n  host: \"\"\n  port: 0\n",
    );
    write_document(
        temp_dir.path(),
        "prod",
        "server:\n  host: localhost\n  timeout:\n    server: 30\n    write: 50\n    read: 15\n",
    );
    temp_dir
}

pub fn write_document(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(format!("{name}.yaml")), contents)
        .expect("failed to write configuration document");
}
