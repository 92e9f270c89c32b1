//! Flag registry configuration files.
//!
//! A configuration file lists the flags a caller recognizes together with
//! their defaults. Flag names are quoted so YAML does not read a leading
//! `-` as a sequence marker.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! flags:
//!   "-a": false
//!   "-b": true
//!   "--verbose": false
//! ```

use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::FlagRegistry;
use crate::error::Result;

/// Current configuration format version.
pub const CONFIG_VERSION: &str = "1.0";

/// Serializable registry definition.
///
/// # Examples
///
/// ```
/// use argsplit_core::RegistryConfig;
///
/// let config = RegistryConfig::from_yaml_str(r#"
/// version: "1.0"
/// flags:
///   "-a": false
///   "-b": true
/// "#).unwrap();
///
/// let registry = config.into_registry().unwrap();
/// assert_eq!(registry.get("-b"), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Recognized flag names mapped to their defaults.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            flags: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ConfigError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::ConfigError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        debug!(path = %path.display(), flags = config.flags.len(), "loaded registry config");
        Ok(config)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Yaml`](crate::ConfigError::Yaml) if parsing fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ConfigError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::ConfigError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Builds a registry seeded with the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Registry`](crate::ConfigError::Registry) if any flag name
    /// is invalid.
    pub fn into_registry(self) -> Result<FlagRegistry> {
        Ok(FlagRegistry::from_defaults(self.flags)?)
    }
}

impl From<&FlagRegistry> for RegistryConfig {
    fn from(registry: &FlagRegistry) -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            flags: registry
                .iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, RegistryError};

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
flags:
  "-a": false
  "-b": true
  "--verbose": false
"#
    }

    #[test]
    fn test_parse_sample() {
        let config = RegistryConfig::from_yaml_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.flags.len(), 3);
        assert_eq!(config.flags.get("-b"), Some(&true));
    }

    #[test]
    fn test_missing_flags_section_is_empty() {
        let config = RegistryConfig::from_yaml_str("version: \"1.0\"\n").unwrap();
        assert!(config.into_registry().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_flag_name_is_rejected() {
        let config = RegistryConfig::from_yaml_str(
            r#"
version: "1.0"
flags:
  "verbose": true
"#,
        )
        .unwrap();
        let err = config.into_registry().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Registry(RegistryError::MissingDashPrefix(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = RegistryConfig::from_yaml_str("flags: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flags.yaml");

        let registry = FlagRegistry::from_defaults([("-x", true), ("--dry-run", false)]).unwrap();
        RegistryConfig::from(&registry).save(&path).unwrap();

        let loaded = RegistryConfig::load(&path).unwrap().into_registry().unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegistryConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
