//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test the full base, environment and override pipeline.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod dotenv_tests;
