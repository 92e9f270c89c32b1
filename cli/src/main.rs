use std::path::PathBuf;
use std::process::ExitCode;

use argsplit_core::{
    ASSIGNMENT_SEPARATOR, FlagRegistry, RegistryConfig, classify_with_report, parse_bool_text,
};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod error;
mod output;
mod selftest;

use error::CliError;
use output::{ClassifyOutput, OutputFormat, render};

/// Exit status when one or more self-test checks fail.
const EXIT_CHECKS_FAILED: u8 = 1;
/// Exit status for fatal errors (bad config, bad `--flag`, output failure).
const EXIT_FATAL: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "argsplit")]
#[command(about = "Split command-line tokens into boolean flags and positional arguments")]
#[command(version)]
struct Cli {
    /// Log classification decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify the tokens given after `--` and print the result.
    Classify(ClassifyArgs),
    /// Run the built-in classification checks.
    SelfTest,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    /// Recognize a flag, as NAME or NAME=DEFAULT (e.g. --flag=-v, --flag=-n=1).
    #[arg(long = "flag", value_name = "NAME[=DEFAULT]", allow_hyphen_values = true)]
    flags: Vec<String>,
    /// YAML file listing recognized flags and their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Leave the first token (the program name) out of classification.
    #[arg(long)]
    skip_program_name: bool,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Tokens to classify.
    #[arg(last = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Classify(args) => run_classify(args),
        Command::SelfTest => run_self_test(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_classify(args: ClassifyArgs) -> Result<ExitCode, CliError> {
    let mut registry = build_registry(args.config.as_deref(), &args.flags)?;

    let tokens = if args.skip_program_name {
        args.tokens.get(1..).unwrap_or_default()
    } else {
        &args.tokens[..]
    };

    let report = classify_with_report(tokens, Some(&mut registry));
    debug!(
        positionals = report.positionals.len(),
        flags = report.flags.len(),
        escaped = report.escaped,
        "classified tokens"
    );

    let output = ClassifyOutput {
        argc: args.tokens.len(),
        positionals: &report.positionals,
        flags: &registry,
        escaped: report.escaped,
    };
    print!("{}", render(&output, args.format)?);
    Ok(ExitCode::SUCCESS)
}

/// Builds the registry from the config file, then applies `--flag` entries.
///
/// A `--flag` entry for a name already in the config overrides its default.
fn build_registry(
    config: Option<&std::path::Path>,
    flag_specs: &[String],
) -> Result<FlagRegistry, CliError> {
    let mut registry = match config {
        Some(path) => RegistryConfig::load(path)
            .and_then(RegistryConfig::into_registry)
            .map_err(|source| CliError::Config {
                path: path.to_path_buf(),
                source,
            })?,
        None => FlagRegistry::new(),
    };

    for spec in flag_specs {
        let (name, default) = parse_flag_spec(spec)?;
        if !registry.set(name, default) {
            registry.register(name, default)?;
        }
    }

    debug!(flags = registry.len(), "registry ready");
    Ok(registry)
}

/// Parses `NAME` or `NAME=DEFAULT`; a bare name defaults to `false`.
fn parse_flag_spec(spec: &str) -> Result<(&str, bool), CliError> {
    match spec.split_once(ASSIGNMENT_SEPARATOR) {
        Some((name, value)) => match parse_bool_text(value) {
            Some(default) => Ok((name, default)),
            None => Err(CliError::InvalidDefault {
                name: name.to_string(),
                value: value.to_string(),
            }),
        },
        None => Ok((spec, false)),
    }
}

fn run_self_test() -> Result<ExitCode, CliError> {
    let run = selftest::run_suite();
    if run.passed() {
        println!("All {} check(s) passed.", run.len());
        return Ok(ExitCode::SUCCESS);
    }

    let failures: Vec<String> = run
        .failures()
        .map(|outcome| {
            format!(
                "{} ({}:{})",
                outcome.name,
                outcome.location.file(),
                outcome.location.line()
            )
        })
        .collect();
    info!(failed = failures.len(), "self-test finished with failures");
    println!(
        "{} of {} check(s) failed: {}",
        failures.len(),
        run.len(),
        failures.join(", ")
    );
    Ok(ExitCode::from(EXIT_CHECKS_FAILED))
}
