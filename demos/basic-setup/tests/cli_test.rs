//! End-to-end tests for the basic-setup demo binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_defaults_deliver_and_evaluate_test_ckpt() {
    let temp = tempfile::TempDir::new().unwrap();
    let results_dir = temp.path().join("results");

    Command::cargo_bin("basic-setup")
        .unwrap()
        .args(["--results-dir", results_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("was set to 'Unknown'"))
        .stdout(predicate::str::contains("we deliver a checkpoint 'test.ckpt'"))
        .stdout(predicate::str::contains("the processed checkpoint is 'test.ckpt'"));

    assert!(results_dir.join("config.json").exists());
    assert!(results_dir.join("checkpoints").is_dir());
}

#[test]
fn test_my_conf_flag_reaches_training() {
    let temp = tempfile::TempDir::new().unwrap();
    let results_dir = temp.path().join("results");

    Command::cargo_bin("basic-setup")
        .unwrap()
        .args(["--results-dir", results_dir.to_str().unwrap(), "--my-conf", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was set to 'hello'"));
}

#[test]
fn test_help_shows_derived_flags() {
    Command::cargo_bin("basic-setup")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("basic-setup"))
        .stdout(predicate::str::contains("--my-conf"))
        .stdout(predicate::str::contains("--results-dir"));
}
