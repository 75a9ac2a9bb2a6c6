//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build a `ConfigLoader` from the shared loading options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strata_config::ConfigLoader;

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Layered YAML configuration loader", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  strata show --dir ./configuration --env prod --prefix APP\n  strata show --format json\n  strata get server.port --env prod --prefix APP\n"
)]
pub struct Cli {
    #[command(flatten)]
    pub load: LoadArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options controlling which layers are loaded.
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Directory containing base.yaml and <environment>.yaml
    #[arg(short, long, global = true, env = "STRATA_CONFIG_DIR", default_value = "configuration")]
    pub dir: PathBuf,

    /// Environment document to overlay on the base document (e.g. prod)
    #[arg(short, long, global = true, env = "STRATA_ENV")]
    pub env: Option<String>,

    /// Prefix of environment variables applied as overrides (e.g. APP)
    #[arg(short, long, global = true, env = "STRATA_ENV_PREFIX")]
    pub prefix: Option<String>,

    /// Separator between override variable segments
    #[arg(short, long, global = true, default_value = "_")]
    pub separator: String,
}

impl LoadArgs {
    /// Build the loader described by these options.
    ///
    /// Blank environment names and prefixes are ignored.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader =
            ConfigLoader::new(self.dir.clone()).with_separator(self.separator.clone());
        if let Some(env) = self.env.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            loader = loader.with_environment(env);
        }
        if let Some(prefix) = self.prefix.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            loader = loader.with_env_prefix(prefix);
        }
        loader
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the merged configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Print the value at a dotted path (e.g. server.port)
    Get {
        /// Dotted path to look up
        path: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_loader_ignores_blank_values() {
        let args = LoadArgs {
            dir: PathBuf::from("configuration"),
            env: Some("  ".to_string()),
            prefix: Some(String::new()),
            separator: "__".to_string(),
        };
        let loader = args.loader();
        assert_eq!(loader.environment(), None);
        assert_eq!(loader.env_prefix(), None);
        assert_eq!(loader.separator(), "__");
    }

    #[test]
    fn test_loader_applies_values() {
        let args = LoadArgs {
            dir: PathBuf::from("/srv/config"),
            env: Some("prod".to_string()),
            prefix: Some("APP".to_string()),
            separator: "_".to_string(),
        };
        let loader = args.loader();
        assert_eq!(loader.base_path(), std::path::Path::new("/srv/config"));
        assert_eq!(loader.environment(), Some("prod"));
        assert_eq!(loader.env_prefix(), Some("APP"));
    }
}
