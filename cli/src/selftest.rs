//! Built-in check suite for `argsplit self-test`.
//!
//! Each check reports into a [`TestRun`] passed down explicitly; the
//! caller reads the aggregate when the suite is done.

use std::panic::Location;

use argsplit_core::{FlagRegistry, RegistryError, classify, classify_with_report};
use tracing::debug;

/// Result of one check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub location: &'static Location<'static>,
    pub passed: bool,
}

/// Accumulated outcomes of a check run.
#[derive(Debug, Default)]
pub struct TestRun {
    outcomes: Vec<CheckOutcome>,
}

impl TestRun {
    /// Records one check. Failures are reported on stderr as
    /// `file:line: check failed: name`.
    #[track_caller]
    pub fn check(&mut self, name: &'static str, passed: bool) -> bool {
        let location = Location::caller();
        if passed {
            debug!(check = name, "check passed");
        } else {
            eprintln!("{}:{}: check failed: {name}", location.file(), location.line());
        }
        self.outcomes.push(CheckOutcome {
            name,
            location,
            passed,
        });
        passed
    }

    /// Returns `true` when every recorded check passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Recorded failures, in order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    /// Number of checks recorded.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
}

/// Runs every built-in check.
pub fn run_suite() -> TestRun {
    let mut run = TestRun::default();
    check_escape_marker(&mut run);
    check_explicit_values(&mut run);
    check_positional_order(&mut run);
    check_last_occurrence_wins(&mut run);
    check_unknown_flag(&mut run);
    check_empty_input(&mut run);
    check_token_accounting(&mut run);
    check_registration_rules(&mut run);
    run
}

fn seeded(defaults: &[(&str, bool)]) -> FlagRegistry {
    let mut registry = FlagRegistry::new();
    for (name, default) in defaults {
        // Names here are literals known to be valid.
        let _ = registry.register(*name, *default);
    }
    registry
}

fn check_escape_marker(run: &mut TestRun) {
    let mut registry = seeded(&[("-a", false), ("-b", false)]);
    let positionals = classify(&["myexe", "-b", "--", "-a", "2"], Some(&mut registry));
    run.check("escape: positionals", positionals == ["myexe", "-a", "2"]);
    run.check("escape: -a untouched", registry.get("-a") == Some(false));
    run.check("escape: -b set", registry.get("-b") == Some(true));
}

fn check_explicit_values(run: &mut TestRun) {
    let mut registry = seeded(&[("-a", true), ("-b", true), ("-c", false), ("-d", false)]);
    let positionals = classify(
        &["myexe", "-a=0", "-b=false", "-c=1", "-d=true"],
        Some(&mut registry),
    );
    run.check("values: positionals", positionals == ["myexe"]);
    run.check("values: -a=0", registry.get("-a") == Some(false));
    run.check("values: -b=false", registry.get("-b") == Some(false));
    run.check("values: -c=1", registry.get("-c") == Some(true));
    run.check("values: -d=true", registry.get("-d") == Some(true));

    classify(&["-c=maybe"], Some(&mut registry));
    run.check("values: unrecognized text keeps value", registry.get("-c") == Some(true));
}

fn check_positional_order(run: &mut TestRun) {
    let positionals = classify(&["x", "-a", "y"], None);
    run.check("order: x then y", positionals == ["x", "y"]);
}

fn check_last_occurrence_wins(run: &mut TestRun) {
    let mut registry = seeded(&[("-a", false)]);
    classify(&["-a", "-a=false", "-a"], Some(&mut registry));
    run.check("repeat: last occurrence wins", registry.get("-a") == Some(true));
}

fn check_unknown_flag(run: &mut TestRun) {
    let mut registry = seeded(&[("-a", false)]);
    let positionals = classify(&["-z"], Some(&mut registry));
    run.check("unknown: not positional", positionals.is_empty());
    run.check("unknown: not inserted", !registry.contains("-z"));
    run.check("unknown: -a untouched", registry.get("-a") == Some(false));
}

fn check_empty_input(run: &mut TestRun) {
    let mut registry = seeded(&[("-a", false)]);
    let positionals = classify::<&str>(&[], Some(&mut registry));
    run.check("empty: no positionals", positionals.is_empty());
    run.check("empty: registry unchanged", registry.get("-a") == Some(false));
}

fn check_token_accounting(run: &mut TestRun) {
    let tokens = ["p", "", "-a", "--", "--", "-b=1"];
    let report = classify_with_report(&tokens, None);
    run.check("accounting: every token once", report.token_count() == tokens.len());
    run.check("accounting: empty token positional", report.positionals.contains(&""));
}

fn check_registration_rules(run: &mut TestRun) {
    let mut registry = FlagRegistry::new();
    run.check(
        "registry: escape marker rejected",
        registry.register("--", false) == Err(RegistryError::EscapeMarker),
    );
    run.check("registry: valid name accepted", registry.register("-v", false).is_ok());
    run.check(
        "registry: duplicate rejected",
        registry.register("-v", true) == Err(RegistryError::DuplicateFlag("-v".to_string())),
    );
}
