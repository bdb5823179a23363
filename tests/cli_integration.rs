//! CLI integration tests
//!
//! These run the built binary in a scratch working directory and check the
//! written index, exit codes and logged diagnostics.

mod support;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use support::{expected_output, fixture_path, testparams_bin, write_file};
use tempfile::TempDir;
use testparams::TestParams;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(testparams_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("TESTPARAMS_ROOT")
        .env_remove("TESTPARAMS_OUTPUT")
        .env_remove("TESTPARAMS_EXCLUDE")
        .env_remove("TESTPARAMS_LOG_LEVEL")
        .env_remove("TESTPARAMS_LOG_JSON")
        .output()
        .expect("Failed to execute testparams")
}

fn read_params(path: &Path) -> TestParams {
    let content = fs::read_to_string(path).expect("output file");
    serde_json::from_str(&content).expect("valid JSON output")
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("testparams"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--exclude"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("testparams"));
}

#[test]
fn test_default_root_and_output() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "foundationdb/tests/fast/t1.txt",
        "testTitle=Foo\nparamA = 1\n\tparamB=2\n",
    );
    write_file(
        dir.path(),
        "foundationdb/tests/fast/t2.toml",
        "x = 1\n[[test.workload]]\ny = 2 # comment\n",
    );

    let output = run_in(dir.path(), &[]);
    assert!(output.status.success());

    let params = read_params(&dir.path().join("test_params.json"));
    assert_eq!(params.general["paramA"], vec!["t1.txt"]);
    assert_eq!(params.workload["paramB"], vec!["t1.txt"]);
    assert_eq!(params.general["x"], vec!["t2.toml"]);
    assert_eq!(params.workload["y"], vec!["t2.toml"]);
}

#[test]
fn test_fixture_tree_output_is_exact() {
    let dir = TempDir::new().unwrap();
    let root = fixture_path("fdb-tests");

    let output = run_in(dir.path(), &[root.to_str().unwrap()]);
    assert!(output.status.success());

    let written = fs::read_to_string(dir.path().join("test_params.json")).unwrap();
    assert_eq!(written, expected_output("fdb-tests"));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let root = fixture_path("fdb-tests");

    assert!(run_in(dir.path(), &[root.to_str().unwrap(), "-o", "first.json"])
        .status
        .success());
    assert!(run_in(dir.path(), &[root.to_str().unwrap(), "-o", "second.json"])
        .status
        .success());

    let first = fs::read(dir.path().join("first.json")).unwrap();
    let second = fs::read(dir.path().join("second.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_input_logged_and_exit_zero() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tests/bad.txt", "no header here\nkey=1\n");

    let output = run_in(dir.path(), &["tests"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("malformed header"));
    assert!(stdout.contains("bad.txt"));
}

#[test]
fn test_missing_root_writes_empty_index() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["does/not/exist"]);
    assert!(output.status.success());

    let params = read_params(&dir.path().join("test_params.json"));
    assert_eq!(params, TestParams::default());
}

#[test]
fn test_non_ascii_keys_written_as_escapes() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tests/t1.txt", "testTitle=Foo\rclé = 1\r");

    let output = run_in(dir.path(), &["tests"]);
    assert!(output.status.success());

    let written = fs::read_to_string(dir.path().join("test_params.json")).unwrap();
    assert!(written.is_ascii());
    assert!(written.contains(r#""cl\u00e9": ["#));
    assert_eq!(read_params(&dir.path().join("test_params.json")).general["clé"], vec!["t1.txt"]);
}

#[test]
fn test_yaml_format() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tests/t1.txt", "testTitle=Foo\nparamA = 1\n");

    let output = run_in(dir.path(), &["tests", "--format", "yaml", "-o", "params.yaml"]);
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join("params.yaml")).unwrap();
    let params: TestParams = serde_yaml::from_str(&content).unwrap();
    assert_eq!(params.general["paramA"], vec!["t1.txt"]);
}

#[test]
fn test_exclude_flag_replaces_defaults() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tests/status/s.txt", "testTitle=S\nfromStatus=1\n");
    write_file(dir.path(), "tests/slow/t.txt", "testTitle=T\nfromSlow=1\n");

    let output = run_in(dir.path(), &["tests", "--exclude", "slow"]);
    assert!(output.status.success());

    let params = read_params(&dir.path().join("test_params.json"));
    assert_eq!(params.all_general_params, vec!["fromStatus"]);
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["tests", "-o", "missing/dir/out.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_format_rejected() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["--format", "xml"]);
    assert!(!output.status.success());
}
