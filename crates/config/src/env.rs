//! Environment variable overrides.
//!
//! Responsibilities:
//! - Select process environment variables named `<PREFIX><SEP><SEGMENT>...`.
//! - Convert each selected name into a lowercase dotted path.
//! - Apply the values to a `MergeableConfig` through its path setter.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `ConfigLoader::load_dotenv`).
//! - Coercing values (done by each configuration type's setter).
//!
//! Invariants:
//! - Prefix matching is case-sensitive; the derived path is lowercased.
//! - Overrides are applied in ascending variable-name order.
//! - The first failing override aborts the overlay; earlier ones stay applied
//!   unless `load_environment_atomic` is used.
//! - Values are passed through verbatim, including any `=` they contain.

use std::ffi::OsString;

use crate::constants::PATH_SEPARATOR;
use crate::error::ConfigError;
use crate::mergeable::MergeableConfig;

/// One environment variable selected for overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverride {
    /// The full variable name, e.g. `APP_SERVER_PORT`.
    pub variable: String,
    /// The derived dotted path, e.g. `server.port`.
    pub path: String,
    /// The raw variable value.
    pub value: String,
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Selects the variables in `vars` that start with `prefix + separator` and
/// derives their dotted paths.
///
/// The result is sorted by variable name.
pub fn scan_environment<I, K, V>(
    prefix: &str,
    separator: &str,
    vars: I,
) -> Result<Vec<EnvOverride>, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    validate_overlay_args(prefix, separator)?;
    let lead = format!("{prefix}{separator}");

    let mut overrides: Vec<EnvOverride> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter_map(|(variable, value)| {
            let rest = variable.strip_prefix(&lead)?;
            let path = rest
                .split(separator)
                .collect::<Vec<_>>()
                .join(PATH_SEPARATOR)
                .to_lowercase();
            Some(EnvOverride {
                variable,
                path,
                value,
            })
        })
        .collect();

    overrides.sort_by(|a, b| a.variable.cmp(&b.variable));
    Ok(overrides)
}

/// Scans the process environment for overrides.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn environment_overrides(
    prefix: &str,
    separator: &str,
) -> Result<Vec<EnvOverride>, ConfigError> {
    scan_environment(prefix, separator, utf8_vars())
}

/// Applies every `<prefix><separator>...` environment variable to `config`.
///
/// # Errors
///
/// - `ConfigError::InvalidArgument` if `prefix` or `separator` is empty.
/// - Whatever `config.set_path_value` returns for the first failing override;
///   overrides applied before it are kept.
pub fn load_environment<C>(prefix: &str, separator: &str, config: &mut C) -> Result<(), ConfigError>
where
    C: MergeableConfig + ?Sized,
{
    let overrides = environment_overrides(prefix, separator)?;
    tracing::debug!(
        prefix,
        count = overrides.len(),
        "Applying environment variable overrides"
    );
    apply_overrides(&overrides, config)
}

/// Like [`load_environment`], but leaves `config` untouched unless every
/// override applies.
pub fn load_environment_atomic<C>(
    prefix: &str,
    separator: &str,
    config: &mut C,
) -> Result<(), ConfigError>
where
    C: MergeableConfig + Clone,
{
    let mut staged = config.clone();
    load_environment(prefix, separator, &mut staged)?;
    *config = staged;
    Ok(())
}

pub(crate) fn apply_overrides<C>(overrides: &[EnvOverride], config: &mut C) -> Result<(), ConfigError>
where
    C: MergeableConfig + ?Sized,
{
    for entry in overrides {
        tracing::debug!(variable = %entry.variable, path = %entry.path, "Applying override");
        config.set_path_value(&entry.path, &entry.value)?;
    }
    Ok(())
}

fn validate_overlay_args(prefix: &str, separator: &str) -> Result<(), ConfigError> {
    if prefix.is_empty() {
        return Err(ConfigError::invalid_argument(
            "environment prefix",
            "must not be empty",
        ));
    }
    if separator.is_empty() {
        return Err(ConfigError::invalid_argument(
            "environment separator",
            "must not be empty",
        ));
    }
    Ok(())
}

fn utf8_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os().filter_map(|(key, value): (OsString, OsString)| {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                tracing::warn!(variable = %key, "Skipping environment variable with non UTF-8 value");
                None
            }
            (Err(key), _) => {
                tracing::warn!(variable = ?key, "Skipping environment variable with non UTF-8 name");
                None
            }
        }
    })
}
