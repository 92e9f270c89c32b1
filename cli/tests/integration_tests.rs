use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn argsplit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argsplit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run argsplit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}

/// Writes a registry config with the given defaults.
fn write_config(dir: &Path, flags: &[(&str, bool)]) -> PathBuf {
    let entries: Vec<String> = flags
        .iter()
        .map(|(name, value)| format!("  \"{name}\": {value}"))
        .collect();
    let yaml = format!(
        "version: \"1.0\"\nflags:\n{entries}\n",
        entries = entries.join("\n")
    );
    let path = dir.join("flags.yaml");
    fs::write(&path, yaml).expect("failed to write config");
    path
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

#[test]
fn classify_escape_marker_scenario_text() {
    let output = argsplit(&[
        "classify",
        "--flag=-a",
        "--flag=-b",
        "--",
        "myexe",
        "-b",
        "--",
        "-a",
        "2",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "argc: 5\n\
         positional: myexe\n\
         positional: -a\n\
         positional: 2\n\
         flag: -a = false\n\
         flag: -b = true\n"
    );
}

#[test]
fn classify_explicit_values_json() {
    let output = argsplit(&[
        "classify",
        "--flag=-a=1",
        "--flag=-b=true",
        "--flag=-c=0",
        "--flag=-d=false",
        "--format",
        "json",
        "--",
        "myexe",
        "-a=0",
        "-b=false",
        "-c=1",
        "-d=true",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["positionals"], serde_json::json!(["myexe"]));
    assert_eq!(
        json["flags"],
        serde_json::json!({ "-a": false, "-b": false, "-c": true, "-d": true })
    );
    assert_eq!(json["argc"], 5);
    assert_eq!(json["escaped"], false);
}

#[test]
fn classify_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &[("-a", false), ("--verbose", true)]);

    let output = argsplit(&[
        "classify",
        "--config",
        config.to_str().unwrap(),
        "--format",
        "json",
        "--",
        "run",
        "-a",
        "--verbose=0",
        "-z",
        "file.txt",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["positionals"], serde_json::json!(["run", "file.txt"]));
    assert_eq!(json["flags"], serde_json::json!({ "-a": true, "--verbose": false }));
}

#[test]
fn classify_flag_option_overrides_config_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &[("-a", false)]);

    let output = argsplit(&[
        "classify",
        "--config",
        config.to_str().unwrap(),
        "--flag=-a=1",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "argc: 0\nflag: -a = true\n");
}

#[test]
fn classify_skip_program_name() {
    let output = argsplit(&[
        "classify",
        "--skip-program-name",
        "--flag=-v",
        "--",
        "myexe",
        "-v",
        "input",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "argc: 3\npositional: input\nflag: -v = true\n"
    );
}

#[test]
fn classify_unrecognized_value_keeps_default() {
    let output = argsplit(&["classify", "--flag=-a=1", "--", "-a=maybe"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "argc: 1\nflag: -a = true\n");
}

#[test]
fn classify_yaml_output() {
    let output = argsplit(&["classify", "--format", "yaml", "--", "x", "--", "-y"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let yaml: serde_yaml::Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    let positionals: Vec<&str> = yaml["positionals"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|value| value.as_str().unwrap())
        .collect();
    assert_eq!(positionals, vec!["x", "-y"]);
    assert_eq!(yaml["escaped"].as_bool(), Some(true));
}

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

#[test]
fn missing_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");

    let output = argsplit(&["classify", "--config", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to load config"));
}

#[test]
fn invalid_flag_default_is_fatal() {
    let output = argsplit(&["classify", "--flag=-a=yes"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid default for flag '-a'"));
}

#[test]
fn escape_marker_cannot_be_registered() {
    let output = argsplit(&["classify", "--flag=--"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("end-of-flags marker"));
}

// ---------------------------------------------------------------------------
// self-test
// ---------------------------------------------------------------------------

#[test]
fn self_test_passes() {
    let output = argsplit(&["self-test"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("check(s) passed"));
    assert!(!stderr(&output).contains("check failed"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = argsplit(&["-v", "classify", "--", "-z"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "argc: 1\n");
    assert!(stderr(&output).contains("discarding unknown flag"));
}
