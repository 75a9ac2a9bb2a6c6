//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use strata_config::ConfigError;
use thiserror::Error;

/// A `get` lookup found nothing at the requested path.
#[derive(Error, Debug)]
#[error("'{0}' is not set in the merged configuration")]
pub struct PathNotFound(pub String);

/// Structured exit codes for `strata`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A configuration document is missing, is a directory, or does not parse.
    DocumentError = 2,

    /// An environment variable override names an unknown path or has a bad value.
    OverrideError = 3,

    /// The requested path is absent from the merged configuration.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_document_error() {
            ExitCode::DocumentError
        } else if err.is_override_error() {
            ExitCode::OverrideError
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<PathNotFound>().is_some() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}
