//! Builder that sequences the configuration loading pipeline.
//!
//! Responsibilities:
//! - Hold the configuration directory, environment name and override prefix.
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//! - Run base load, environment load, merge and environment overlay in order.
//!
//! Does NOT handle:
//! - Deciding what to do on failure; every error is returned to the caller.
//!
//! Invariants / Assumptions:
//! - The configuration starts from `T::default()`, its zero value.
//! - An environment name, once set, requires its document to exist.
//! - Environment variable overrides only run when a prefix is configured.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{BASE_DOCUMENT_NAME, DEFAULT_ENV_SEPARATOR, DOTENV_DISABLED_VAR};
use crate::document::{load_base, load_from};
use crate::env::{env_var_or_none, load_environment};
use crate::error::ConfigError;
use crate::mergeable::MergeableConfig;
use crate::path::document_path;

/// Configuration loader that layers documents and environment variables.
///
/// # Example
///
/// ```no_run
/// use strata_config::{ConfigLoader, DynamicConfig};
///
/// let config: DynamicConfig = ConfigLoader::new("configuration")
///     .with_environment("prod")
///     .with_env_prefix("APP")
///     .load()?;
/// # Ok::<(), strata_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_path: PathBuf,
    environment: Option<String>,
    env_prefix: Option<String>,
    separator: String,
}

impl ConfigLoader {
    /// Create a loader reading documents from `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            environment: None,
            env_prefix: None,
            separator: DEFAULT_ENV_SEPARATOR.to_string(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file in the current directory.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    /// A missing file is silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }
        Self::map_dotenv_result(dotenvy::dotenv().map(|_| ()))?;
        Ok(self)
    }

    /// Load environment variables from the `.env`-formatted file at `path`.
    ///
    /// Same gate and error mapping as [`ConfigLoader::load_dotenv`].
    pub fn load_dotenv_from(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }
        Self::map_dotenv_result(dotenvy::from_path(path.as_ref()))?;
        Ok(self)
    }

    fn map_dotenv_result(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if Self::is_not_found(&e) => Ok(()),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Select the environment-specific document to overlay (e.g. `prod`).
    pub fn with_environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// Select the environment from a variable such as `APP_ENV`.
    ///
    /// Unset, empty or whitespace-only variables leave the current selection alone.
    pub fn with_environment_from_var(mut self, var: &str) -> Self {
        if let Some(name) = env_var_or_none(var) {
            self.environment = Some(name);
        }
        self
    }

    /// Enable environment variable overrides for variables starting with
    /// `prefix` followed by the separator.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Override the separator between override variable segments (default `_`).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Run the pipeline and return the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failure of any stage:
    /// - document errors (`Io`, `InvalidPath`, `Parse`) from either document,
    /// - merge errors from `MergeableConfig::merge_with`,
    /// - override errors (`UnknownPath`, `Coercion`, `InvalidArgument`).
    pub fn load<T>(&self) -> Result<T, ConfigError>
    where
        T: Serialize + DeserializeOwned + Default + MergeableConfig,
    {
        let mut config = T::default();
        load_base(&self.base_path, &mut config)?;
        tracing::debug!(
            path = %document_path(&self.base_path, BASE_DOCUMENT_NAME).display(),
            "Loaded base configuration"
        );

        if let Some(environment) = &self.environment {
            let mut overlay = T::default();
            load_from(&self.base_path, environment, &mut overlay)?;
            config.merge_with(&overlay)?;
            tracing::debug!(environment = %environment, "Merged environment configuration");
        }

        if let Some(prefix) = &self.env_prefix {
            load_environment(prefix, &self.separator, &mut config)?;
        }

        Ok(config)
    }
}
