//! Single-pass token classification.
//!
//! Walks the tokens left to right with one bit of state, the [`Mode`]. In
//! [`Mode::AcceptingFlags`] the first `--` is consumed and switches to
//! [`Mode::PositionalOnly`]; non-empty tokens starting with `-` are flag
//! occurrences; everything else is positional. Flag occurrences update the
//! caller's [`FlagRegistry`] when it knows the name and are dropped
//! otherwise.
//!
//! Classification is total: any token sequence is valid input and there is
//! no error path.

use tracing::{debug, trace};

use crate::{
    ASSIGNMENT_SEPARATOR, Classification, ESCAPE_MARKER, FLAG_INTRODUCER, FlagAssignment,
    FlagOccurrence, FlagRegistry, Mode, TokenKind,
};

/// Classifies one token under `mode`.
///
/// # Examples
///
/// ```
/// use argsplit_core::{Mode, TokenKind, classify_token};
///
/// assert_eq!(classify_token("--", Mode::AcceptingFlags), TokenKind::EscapeMarker);
/// assert_eq!(classify_token("-a=1", Mode::AcceptingFlags), TokenKind::Flag);
/// assert_eq!(classify_token("-a", Mode::PositionalOnly), TokenKind::Positional);
/// assert_eq!(classify_token("", Mode::AcceptingFlags), TokenKind::Positional);
/// ```
pub fn classify_token(token: &str, mode: Mode) -> TokenKind {
    match mode {
        Mode::PositionalOnly => TokenKind::Positional,
        Mode::AcceptingFlags if token == ESCAPE_MARKER => TokenKind::EscapeMarker,
        Mode::AcceptingFlags if token.starts_with(FLAG_INTRODUCER) => TokenKind::Flag,
        Mode::AcceptingFlags => TokenKind::Positional,
    }
}

/// Splits a flag token into its name and assignment.
fn split_flag(token: &str) -> (&str, FlagAssignment) {
    match token.split_once(ASSIGNMENT_SEPARATOR) {
        Some((name, value_text)) => (name, FlagAssignment::from_value_text(value_text)),
        None => (token, FlagAssignment::Present),
    }
}

/// Classifies `tokens`, returning the positional arguments in order.
///
/// Known flags in `registry` are updated in place; the last occurrence of a
/// flag wins. Unknown flags are discarded. With no registry, flags are
/// still recognized and removed from the positional output.
///
/// The program name, if present at index zero, is an ordinary positional.
///
/// # Examples
///
/// ```
/// use argsplit_core::{FlagRegistry, classify};
///
/// let mut registry = FlagRegistry::from_defaults([("-a", false), ("-b", false)]).unwrap();
/// let positionals = classify(&["myexe", "-b", "--", "-a", "2"], Some(&mut registry));
///
/// assert_eq!(positionals, vec!["myexe", "-a", "2"]);
/// assert_eq!(registry.get("-a"), Some(false));
/// assert_eq!(registry.get("-b"), Some(true));
/// ```
pub fn classify<'a, S: AsRef<str>>(
    tokens: &'a [S],
    registry: Option<&mut FlagRegistry>,
) -> Vec<&'a str> {
    classify_with_report(tokens, registry).positionals
}

/// Classifies `tokens` like [`classify`] and also reports every flag
/// occurrence and whether the escape marker was seen.
///
/// # Examples
///
/// ```
/// use argsplit_core::{FlagAssignment, FlagRegistry, classify_with_report};
///
/// let mut registry = FlagRegistry::from_defaults([("-a", true)]).unwrap();
/// let report = classify_with_report(&["-a=maybe", "-z", "x"], Some(&mut registry));
///
/// assert_eq!(report.positionals, vec!["x"]);
/// assert_eq!(report.flags[0].assignment, FlagAssignment::Unrecognized("maybe".into()));
/// assert!(report.flags[0].known && !report.flags[0].recorded);
/// assert_eq!(report.unknown_flags().collect::<Vec<_>>(), vec!["-z"]);
/// assert_eq!(registry.get("-a"), Some(true));
/// ```
pub fn classify_with_report<'a, S: AsRef<str>>(
    tokens: &'a [S],
    mut registry: Option<&mut FlagRegistry>,
) -> Classification<'a> {
    let mut mode = Mode::AcceptingFlags;
    let mut classification = Classification::default();

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        match classify_token(token, mode) {
            TokenKind::EscapeMarker => {
                debug!(index, "end-of-flags marker, remaining tokens are positional");
                mode = Mode::PositionalOnly;
                classification.escaped = true;
            }
            TokenKind::Flag => {
                let (name, assignment) = split_flag(token);
                let known = registry
                    .as_deref()
                    .is_some_and(|registry| registry.contains(name));
                let recorded = match (assignment.resolved(), registry.as_deref_mut()) {
                    (Some(value), Some(registry)) if known => registry.set(name, value),
                    (None, _) if known => {
                        trace!(index, flag = name, token, "unrecognized flag value, keeping stored value");
                        false
                    }
                    _ => {
                        debug!(index, flag = name, "discarding unknown flag");
                        false
                    }
                };
                classification.flags.push(FlagOccurrence {
                    name,
                    assignment,
                    known,
                    recorded,
                });
            }
            TokenKind::Positional => classification.positionals.push(token),
        }
    }

    classification
}
