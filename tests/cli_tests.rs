// End-to-end runs of the profsort binary against fixture profile tables.
#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "\
10 5.00ms 200ns foo
3 12.00ms 50ns bar

8 5.00ms 900ns baz
";

fn workdir(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("profile.txt"), contents).unwrap();
    dir
}

fn profsort(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("profsort").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_total_time_is_default() {
    let dir = workdir(SAMPLE);
    profsort(&dir).assert().success().stdout(
        "Function: bar, Time: 12.0ms, Calls: 3\n\
         Function: foo, Time: 5.0ms, Calls: 10\n\
         Function: baz, Time: 5.0ms, Calls: 8\n",
    );
}

#[test]
fn test_self_time() {
    let dir = workdir(SAMPLE);
    profsort(&dir).args(["--by", "self"]).assert().success().stdout(
        "Function: baz, Self Time: 900ns, Calls: 8\n\
         Function: foo, Self Time: 200ns, Calls: 10\n\
         Function: bar, Self Time: 50ns, Calls: 3\n",
    );
}

#[test]
fn test_explicit_input_path() {
    let dir = workdir("");
    let other = dir.path().join("other.prof");
    fs::write(&other, "1 0.5ms 7ns main\n").unwrap();
    profsort(&dir)
        .arg("--input")
        .arg(&other)
        .assert()
        .success()
        .stdout("Function: main, Time: 0.5ms, Calls: 1\n");
}

#[test]
fn test_runs_are_idempotent() {
    let dir = workdir(SAMPLE);
    let first = profsort(&dir).output().unwrap();
    let second = profsort(&dir).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("profsort").unwrap();
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("profile.txt"));
}

#[test]
fn test_bare_suffix_fails_without_partial_output() {
    let dir = workdir("10 5.00ms 200ns foo\n1 ms 1ns bad\n");
    profsort(&dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_short_line_fails() {
    let dir = workdir("10 5.00ms\n");
    profsort(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected at least 3 fields"));
}

#[test]
fn test_filter_and_top() {
    let dir = workdir(SAMPLE);
    profsort(&dir)
        .args(["--filter", "^(foo|baz)$", "-n", "1"])
        .assert()
        .success()
        .stdout("Function: foo, Time: 5.0ms, Calls: 10\n");
}

#[test]
fn test_invalid_filter_is_rejected() {
    let dir = workdir(SAMPLE);
    profsort(&dir)
        .args(["--filter", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --filter regex"));
}

#[test]
fn test_json_output() {
    let dir = workdir(SAMPLE);
    let output = profsort(&dir).args(["--by", "self", "-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["metric"], "self_time");
    assert_eq!(v["entries"].as_array().unwrap().len(), 3);
    assert_eq!(v["entries"][0]["function"], "baz");
    assert_eq!(v["entries"][0]["value"], 900);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = workdir(SAMPLE);
    profsort(&dir)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Function: bar"))
        .stderr(predicate::str::contains("loaded profile"));
}
