//! Integration tests for the `advent` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn advent() -> Command {
    Command::cargo_bin("advent").unwrap()
}

fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

// ---------------------------------------------------------------------------
// replay
// ---------------------------------------------------------------------------

#[test]
fn replay_prints_each_exchange() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "walk.txt", "# into the house\nin\nget lamp\n");

    advent()
        .args(["replay", script.to_str().unwrap(), "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> in"))
        .stdout(predicate::str::contains(
            "You are inside a building, a well house for a large spring.",
        ))
        .stdout(predicate::str::contains("> get lamp\nOK"))
        .stdout(predicate::str::contains("[end of script"));
}

#[test]
fn replay_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "walk.txt", "in\nget lamp\nout\ns\ns\ns\n");

    let run = || {
        advent()
            .args(["replay", script.to_str().unwrap(), "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn replay_reports_quitting() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "quit.txt", "quit\nyes\nlook\n");

    advent()
        .args(["replay", script.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("You scored"))
        .stdout(predicate::str::contains("[game over after"))
        .stdout(predicate::str::contains("> look").not());
}

#[test]
fn replay_missing_script_fails() {
    advent()
        .args(["replay", "/nonexistent/script.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// words
// ---------------------------------------------------------------------------

#[test]
fn words_lists_the_vocabulary() {
    advent()
        .arg("words")
        .assert()
        .success()
        .stdout(predicate::str::contains("motion  xyzzy"))
        .stdout(predicate::str::contains("object  lamp"))
        .stdout(predicate::str::contains("action  carry"));
}

#[test]
fn words_as_json() {
    advent()
        .args(["words", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"plugh\""))
        .stdout(predicate::str::contains("\"kind\": \"Motion\""));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_until_quit() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("session.log");

    advent()
        .args(["play", "--seed", "5", "--no-intro", "--log", log.to_str().unwrap()])
        .write_stdin("in\nquit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are inside a building"))
        .stdout(predicate::str::contains("Do you really want to quit now?"))
        .stdout(predicate::str::contains("You scored"));

    assert_eq!(fs::read_to_string(&log).unwrap(), "in\nquit\ny\n");
}

#[test]
fn play_offers_instructions_by_default() {
    advent()
        .args(["play", "--seed", "5"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Adventure!!"));
}

#[test]
fn play_runs_scripts_before_the_keyboard() {
    let dir = TempDir::new().unwrap();
    let first = write_script(dir.path(), "one.txt", "in\n");
    let second = write_script(dir.path(), "two.txt", "get lamp\n");

    advent()
        .args(["play", "--seed", "5", "--no-intro", "--script"])
        .arg(&first)
        .arg(&second)
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brass lantern"));
}

#[test]
fn autosave_can_be_checked_and_restored() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("auto.json");

    advent()
        .args(["play", "--seed", "5", "--no-intro", "--autosave", save.to_str().unwrap()])
        .write_stdin("in\nget lamp\n")
        .assert()
        .success();

    advent()
        .args(["check", save.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid save file"))
        .stdout(predicate::str::contains("Turns:     2"));

    advent()
        .args(["play", "--restore", save.to_str().unwrap()])
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brass lantern"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_rejects_foreign_files() {
    let dir = TempDir::new().unwrap();
    let save = write_script(dir.path(), "other.json", r#"{"format": "other", "version": 1}"#);

    advent()
        .args(["check", save.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a saved adventure"));
}

#[test]
fn check_missing_file_fails() {
    advent()
        .args(["check", "/nonexistent/save.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
