//! Errors surfaced by the `argsplit` binary.

use std::path::PathBuf;

use argsplit_core::{ConfigError, RegistryError};
use thiserror::Error;

/// Fatal errors; `main` prints them and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// The registry config file could not be loaded or applied.
    #[error("failed to load config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    /// A `--flag` entry names an invalid or duplicate flag.
    #[error("invalid --flag: {0}")]
    Registry(#[from] RegistryError),

    /// A `--flag NAME=DEFAULT` entry has a non-boolean default.
    #[error("invalid default for flag '{name}': '{value}' (expected true, false, 1 or 0)")]
    InvalidDefault { name: String, value: String },

    /// JSON rendering failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML rendering failed.
    #[error("failed to serialize output: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
