//! Layered configuration loading.
//!
//! This crate loads a base YAML document, overlays an environment-specific
//! document, and then applies overrides taken from prefixed process
//! environment variables, producing one merged configuration value.

pub mod coerce;
pub mod constants;
pub mod document;
pub mod dynamic;
pub mod env;
mod error;
mod loader;
pub mod mergeable;
pub mod path;
pub mod zero;

pub use coerce::{parse_flag, parse_value};
pub use document::{decode_into, load_base, load_from, read_document};
pub use dynamic::DynamicConfig;
pub use env::{
    EnvOverride, env_var_or_none, environment_overrides, load_environment,
    load_environment_atomic, scan_environment,
};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use mergeable::{MergeableConfig, merge_any};
pub use path::{document_path, validate_config_path};
pub use zero::{IsZero, is_default, merge_field};
