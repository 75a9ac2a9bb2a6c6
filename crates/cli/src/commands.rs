//! Command implementations.
//!
//! Responsibilities:
//! - Load the merged configuration for a command.
//! - Render configuration values as YAML or JSON.
//!
//! Does NOT handle:
//! - Argument parsing (see `args.rs`).
//! - Exit code selection (see `error.rs`).

use anyhow::{Context, Result};
use serde_yaml::Value;
use strata_config::{ConfigLoader, DynamicConfig};

use crate::args::OutputFormat;
use crate::error::PathNotFound;

/// Load the merged configuration described by `loader`.
pub fn load(loader: &ConfigLoader) -> Result<DynamicConfig> {
    loader.load().with_context(|| {
        format!(
            "Failed to load configuration from {}",
            loader.base_path().display()
        )
    })
}

/// Render the whole merged configuration.
pub fn show(loader: &ConfigLoader, format: OutputFormat) -> Result<String> {
    let config = load(loader)?;
    render(config.as_value(), format)
}

/// Render the value at `path` in the merged configuration.
pub fn get(loader: &ConfigLoader, path: &str, format: OutputFormat) -> Result<String> {
    let config = load(loader)?;
    let value = config
        .get_path(path)
        .ok_or_else(|| PathNotFound(path.to_string()))?;
    match (value, format) {
        // Scalars print bare so shell scripts can consume them directly.
        (Value::String(s), _) => Ok(format!("{s}\n")),
        (Value::Bool(_) | Value::Number(_), _) => render_json(value),
        _ => render(value, format),
    }
}

fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).context("Failed to render configuration as YAML")
        }
        OutputFormat::Json => render_json(value),
    }
}

fn render_json(value: &Value) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(value).context("Failed to render configuration as JSON")?;
    out.push('\n');
    Ok(out)
}
