//! Token classification type definitions.
//!
//! This module defines the vocabulary shared by the classifier and its
//! callers: the lexical constants that drive classification, the two-state
//! parse [`Mode`], and the [`Classification`] produced by one parse. Result
//! types derive [`serde::Serialize`] so front ends can render them directly.

use serde::Serialize;

/// Token that switches every following token to positional classification.
pub const ESCAPE_MARKER: &str = "--";

/// Leading character that marks a token as a flag occurrence.
pub const FLAG_INTRODUCER: char = '-';

/// Separator between a flag name and an explicit value (`-a=true`).
pub const ASSIGNMENT_SEPARATOR: char = '=';

/// Parse mode of a single left-to-right pass.
///
/// A parse starts in [`Mode::AcceptingFlags`] and moves to
/// [`Mode::PositionalOnly`] on the first [`ESCAPE_MARKER`]. The transition
/// is one-way.
///
/// # Examples
///
/// ```
/// use argsplit_core::Mode;
///
/// assert_eq!(Mode::default(), Mode::AcceptingFlags);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Flag-shaped tokens are classified as flags (the initial mode).
    #[default]
    AcceptingFlags,
    /// Every remaining token is positional.
    PositionalOnly,
}

/// How one token is classified under a given [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The active escape marker; consumed without output.
    EscapeMarker,
    /// A flag occurrence, bare or `name=value`.
    Flag,
    /// A positional argument, kept verbatim.
    Positional,
}

/// Resolves boolean value text from a `name=value` flag.
///
/// Only `true`/`1` and `false`/`0` are recognized. Matching is exact: no
/// case folding and no trimming.
///
/// # Examples
///
/// ```
/// use argsplit_core::parse_bool_text;
///
/// assert_eq!(parse_bool_text("1"), Some(true));
/// assert_eq!(parse_bool_text("false"), Some(false));
/// assert_eq!(parse_bool_text("yes"), None);
/// assert_eq!(parse_bool_text("TRUE"), None);
/// ```
pub fn parse_bool_text(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Value carried by one flag occurrence.
///
/// # Examples
///
/// ```
/// use argsplit_core::FlagAssignment;
///
/// assert_eq!(FlagAssignment::Present.resolved(), Some(true));
/// assert_eq!(FlagAssignment::Explicit(false).resolved(), Some(false));
/// assert_eq!(FlagAssignment::Unrecognized("maybe".into()).resolved(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagAssignment {
    /// Bare flag; presence sets the flag to `true`.
    Present,
    /// `name=value` with a recognized boolean value.
    Explicit(bool),
    /// `name=value` whose value text is not a boolean. The stored value
    /// is left as it was.
    Unrecognized(String),
}

impl FlagAssignment {
    /// Parses the text after the assignment separator.
    pub fn from_value_text(text: &str) -> Self {
        match parse_bool_text(text) {
            Some(value) => Self::Explicit(value),
            None => Self::Unrecognized(text.to_string()),
        }
    }

    /// Returns the boolean this occurrence writes, if any.
    pub fn resolved(&self) -> Option<bool> {
        match self {
            Self::Present => Some(true),
            Self::Explicit(value) => Some(*value),
            Self::Unrecognized(_) => None,
        }
    }
}

/// One flag-shaped token seen during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagOccurrence<'a> {
    /// Flag name: the whole token, or the text before the first `=`.
    pub name: &'a str,
    /// Value carried by the occurrence.
    pub assignment: FlagAssignment,
    /// Whether the registry knows `name`.
    pub known: bool,
    /// Whether a registry entry was updated by this occurrence.
    pub recorded: bool,
}

/// Outcome of one parse.
///
/// Holds the positional arguments in encountered order plus a trace of
/// every flag occurrence. Every input token lands in exactly one of
/// `positionals`, `flags`, or the active escape marker, so
/// `positionals.len() + flags.len() + escaped as usize` equals the number
/// of input tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification<'a> {
    /// Positional arguments, verbatim and in order.
    pub positionals: Vec<&'a str>,
    /// Flag occurrences, in order.
    pub flags: Vec<FlagOccurrence<'a>>,
    /// Whether the escape marker was seen.
    pub escaped: bool,
}

impl<'a> Classification<'a> {
    /// Number of input tokens this classification accounts for.
    pub fn token_count(&self) -> usize {
        self.positionals.len() + self.flags.len() + usize::from(self.escaped)
    }

    /// Names of flags that were discarded because the registry did not
    /// know them.
    pub fn unknown_flags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.flags
            .iter()
            .filter(|occurrence| !occurrence.known)
            .map(|occurrence| occurrence.name)
    }
}
