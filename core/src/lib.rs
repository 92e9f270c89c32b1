//! Command-line token classification.
//!
//! This crate splits a raw argument list into boolean flags and positional
//! arguments:
//!
//! - [`classify`]: one left-to-right pass returning the positionals and
//!   updating a caller-owned [`FlagRegistry`].
//! - [`classify_with_report`]: the same pass, also returning a
//!   [`Classification`] with every flag occurrence.
//! - [`FlagRegistry`]: recognized flag names and their current values,
//!   seeded with defaults before parsing.
//! - [`RegistryConfig`]: YAML definition of a registry.
//!
//! A bare flag (`-v`) sets its entry to `true`. An explicit value
//! (`-v=false`) sets it to the value when the text is `true`, `1`, `false`
//! or `0`; any other text leaves the entry untouched. Unknown flags are
//! dropped. The first `--` makes every later token positional.
//!
//! # Example
//!
//! ```
//! use argsplit_core::*;
//!
//! let mut registry = FlagRegistry::from_defaults([
//!     ("-a", true),
//!     ("-b", true),
//!     ("-c", false),
//!     ("-d", false),
//! ])
//! .unwrap();
//!
//! let positionals = classify(
//!     &["myexe", "-a=0", "-b=false", "-c=1", "-d=true"],
//!     Some(&mut registry),
//! );
//!
//! assert_eq!(positionals, vec!["myexe"]);
//! assert_eq!(registry.get("-a"), Some(false));
//! assert_eq!(registry.get("-b"), Some(false));
//! assert_eq!(registry.get("-c"), Some(true));
//! assert_eq!(registry.get("-d"), Some(true));
//! ```

mod classify;
mod config;
mod error;
mod registry;
mod types;
mod validate;

pub use classify::{classify, classify_token, classify_with_report};
pub use config::{CONFIG_VERSION, RegistryConfig};
pub use error::{ConfigError, Result};
pub use registry::FlagRegistry;
pub use types::*;
pub use validate::{RegistryError, validate_flag_name};
