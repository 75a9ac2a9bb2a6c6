//! Layered configuration loading.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that runs the full pipeline:
//!   base document, environment-specific document, environment variables.
//! - Enforce the `DOTENV_DISABLED` gate before loading a `.env` file.
//!
//! Does NOT handle:
//! - Parsing documents (see `document.rs`).
//! - Scanning environment variables (see `env.rs`).
//!
//! Invariants / Assumptions:
//! - Environment-specific values win over base values unless they are zero.
//! - Environment variables win over both documents.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;

pub use builder::ConfigLoader;

#[cfg(test)]
mod tests;
