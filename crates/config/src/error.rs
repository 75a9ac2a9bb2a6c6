//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every document, merge and overlay failure.
//! - Carry enough context (paths, variable names) to diagnose a failure.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see `crates/cli`).
//!
//! Invariants:
//! - Errors never include raw override values or `.env` line contents, which
//!   may hold secrets.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, merging or overriding configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be opened or inspected.
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The resolved document path is a directory.
    #[error("'{path}' is a directory, not a normal file")]
    InvalidPath { path: PathBuf },

    /// The document does not deserialize into the target type.
    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A type-erased overlay was not the expected concrete configuration type.
    #[error("Overlay is not a valid {expected} configuration")]
    TypeMismatch { expected: &'static str },

    /// A dotted path does not address any known field.
    #[error("'{0}' is not a valid path")]
    UnknownPath(String),

    /// An override string cannot be converted to the field's type.
    #[error("Invalid value for {path}: {message}")]
    Coercion { path: String, message: String },

    #[error("Invalid {name}: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Returns true if the error reports a missing document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == ErrorKind::NotFound)
    }

    /// Returns true for errors raised while reading or parsing a document.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            ConfigError::Io { .. } | ConfigError::InvalidPath { .. } | ConfigError::Parse { .. }
        )
    }

    /// Returns true for errors raised while applying a path-based override.
    pub fn is_override_error(&self) -> bool {
        matches!(
            self,
            ConfigError::UnknownPath(_) | ConfigError::Coercion { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}
