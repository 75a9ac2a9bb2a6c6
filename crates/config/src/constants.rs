//! Centralized constants for configuration loading.
//!
//! Responsibilities:
//! - Name the base document and the document file extension.
//! - Provide defaults for environment-variable overlay parsing.
//!
//! Does NOT handle:
//! - Building paths (see `path.rs`).
//! - Reading environment variables (see `env.rs`).

/// Name of the document that is always loaded first.
pub const BASE_DOCUMENT_NAME: &str = "base";

/// File extension shared by every configuration document.
pub const DOCUMENT_EXTENSION: &str = "yaml";

/// Default separator between segments of an override variable name.
pub const DEFAULT_ENV_SEPARATOR: &str = "_";

/// Separator between segments of a dotted path.
pub const PATH_SEPARATOR: &str = ".";

/// Variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
