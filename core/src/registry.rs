//! Caller-owned table of recognized flags and their current values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validate::{RegistryError, validate_flag_name};

/// Mapping from recognized flag names to their current boolean value.
///
/// The caller registers every flag it wants to recognize, with its default,
/// before parsing. The classifier then overwrites values of known names and
/// never inserts new ones. Keys are owned strings, so a registry does not
/// borrow from any argument buffer.
///
/// Iteration is ordered by flag name.
///
/// # Examples
///
/// ```
/// use argsplit_core::FlagRegistry;
///
/// let mut registry = FlagRegistry::new();
/// registry.register("-v", false).unwrap();
/// assert_eq!(registry.get("-v"), Some(false));
///
/// assert!(registry.set("-v", true));
/// assert!(!registry.set("-q", true));
/// assert_eq!(registry.get("-v"), Some(true));
/// assert!(!registry.contains("-q"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct FlagRegistry {
    flags: BTreeMap<String, bool>,
}

impl FlagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `(name, default)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid or duplicate name.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsplit_core::{FlagRegistry, RegistryError};
    ///
    /// let registry = FlagRegistry::from_defaults([("-a", false), ("-b", true)]).unwrap();
    /// assert_eq!(registry.len(), 2);
    ///
    /// let err = FlagRegistry::from_defaults([("-a", false), ("-a", true)]).unwrap_err();
    /// assert_eq!(err, RegistryError::DuplicateFlag("-a".into()));
    /// ```
    pub fn from_defaults<I, S>(defaults: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (name, default) in defaults {
            registry.register(name, default)?;
        }
        Ok(registry)
    }

    /// Registers `name` with its default value.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the name is not a valid flag name or
    /// is already registered.
    pub fn register(&mut self, name: impl Into<String>, default: bool) -> Result<(), RegistryError> {
        let name = name.into();
        validate_flag_name(&name)?;
        if self.flags.contains_key(&name) {
            return Err(RegistryError::DuplicateFlag(name));
        }
        self.flags.insert(name, default);
        Ok(())
    }

    /// Overwrites the value of an already registered flag.
    ///
    /// Returns `false`, leaving the registry untouched, when `name` is not
    /// registered.
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        match self.flags.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Returns the current value of `name`.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Number of registered flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if no flags are registered.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterates `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.flags.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl TryFrom<BTreeMap<String, bool>> for FlagRegistry {
    type Error = RegistryError;

    fn try_from(flags: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        for name in flags.keys() {
            validate_flag_name(name)?;
        }
        Ok(Self { flags })
    }
}

impl From<FlagRegistry> for BTreeMap<String, bool> {
    fn from(registry: FlagRegistry) -> Self {
        registry.flags
    }
}
