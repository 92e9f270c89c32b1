//! Rendering of classification results.

use std::fmt::Write as _;

use argsplit_core::FlagRegistry;
use serde::Serialize;

use crate::error::CliError;

/// Output format for `argsplit classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `key: value` line per item.
    Text,
    Json,
    Yaml,
}

/// Everything `classify` prints.
#[derive(Debug, Serialize)]
pub struct ClassifyOutput<'a> {
    /// Number of tokens received, program name included.
    pub argc: usize,
    /// Positional arguments in order.
    pub positionals: &'a [&'a str],
    /// Resolved value of every registered flag.
    pub flags: &'a FlagRegistry,
    /// Whether an end-of-flags marker was consumed.
    pub escaped: bool,
}

/// Renders `output` in the requested format.
pub fn render(output: &ClassifyOutput<'_>, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(output)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(output)?),
    }
}

fn render_text(output: &ClassifyOutput<'_>) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "argc: {}", output.argc);
    for positional in output.positionals {
        let _ = writeln!(text, "positional: {positional}");
    }
    for (name, value) in output.flags.iter() {
        let _ = writeln!(text, "flag: {name} = {value}");
    }
    text
}
