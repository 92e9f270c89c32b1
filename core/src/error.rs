//! Error types for registry configuration.
//!
//! Classification itself cannot fail; these errors cover loading and
//! saving registry configuration and building a registry from it.

use thiserror::Error;

use crate::RegistryError;

/// Errors that can occur while loading or applying a registry configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration names a flag the registry rejects.
    #[error("invalid registry: {0}")]
    Registry(#[from] RegistryError),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
