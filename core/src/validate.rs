//! Flag-name validation for registry entries.
//!
//! A registry key must be something the classifier can actually look up:
//! it starts with the flag introducer, has at least one character after the
//! first dash, is not the escape marker, and contains no assignment
//! separator (the classifier splits on the first `=` before the lookup).
//!
//! Validation guards registration only. The classifier accepts any token
//! sequence and never reports errors.
//!
//! # Examples
//!
//! ```
//! use argsplit_core::{RegistryError, validate_flag_name};
//!
//! assert!(validate_flag_name("-v").is_ok());
//! assert!(validate_flag_name("--verbose").is_ok());
//! assert_eq!(validate_flag_name("--"), Err(RegistryError::EscapeMarker));
//! assert!(matches!(
//!     validate_flag_name("v"),
//!     Err(RegistryError::MissingDashPrefix(_))
//! ));
//! ```

use thiserror::Error;

use crate::{ASSIGNMENT_SEPARATOR, ESCAPE_MARKER, FLAG_INTRODUCER};

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Flag name is the empty string.
    #[error("flag name cannot be empty")]
    EmptyFlagName,
    /// Flag name does not start with `-`.
    #[error("flag name must start with '-': {0}")]
    MissingDashPrefix(String),
    /// Flag name is a lone `-`.
    #[error("flag name needs at least one character after '-'")]
    BareDash,
    /// Flag name is the escape marker `--`.
    #[error("'--' is the end-of-flags marker and cannot be registered")]
    EscapeMarker,
    /// Flag name contains `=`, so no token could ever match it.
    #[error("flag name cannot contain '=': {0}")]
    ContainsSeparator(String),
    /// Flag name is already registered.
    #[error("duplicate flag in registry: {0}")]
    DuplicateFlag(String),
}

/// Checks that `name` can be used as a registry key.
///
/// # Errors
///
/// Returns the first [`RegistryError`] that applies. Duplicate detection
/// is the registry's job and is not performed here.
pub fn validate_flag_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::EmptyFlagName);
    }
    let Some(rest) = name.strip_prefix(FLAG_INTRODUCER) else {
        return Err(RegistryError::MissingDashPrefix(name.to_string()));
    };
    if rest.is_empty() {
        return Err(RegistryError::BareDash);
    }
    if name == ESCAPE_MARKER {
        return Err(RegistryError::EscapeMarker);
    }
    if name.contains(ASSIGNMENT_SEPARATOR) {
        return Err(RegistryError::ContainsSeparator(name.to_string()));
    }
    Ok(())
}
