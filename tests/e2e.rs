//! End-to-end tests for the pgv binary
//!
//! Exercises the non-interactive surfaces: dump mode, help, version,
//! and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("readme.md"), "hello world\n").unwrap();
    std::fs::create_dir(temp.path().join("docs")).unwrap();
    std::fs::write(temp.path().join("docs").join("guide.md"), "guide body\n").unwrap();
    temp
}

#[test]
fn test_dump_file_prints_contents() {
    let temp = fixture_root();
    Command::cargo_bin("pgv")
        .unwrap()
        .arg(temp.path())
        .args(["--dump", "readme.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn test_dump_directory_prints_listing() {
    let temp = fixture_root();
    Command::cargo_bin("pgv")
        .unwrap()
        .arg(temp.path())
        .args(["--dump", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/"))
        .stdout(predicate::str::contains("readme.md"));
}

#[test]
fn test_dump_unresolved_term_prints_search_results() {
    let temp = fixture_root();
    Command::cargo_bin("pgv")
        .unwrap()
        .arg(temp.path())
        .args(["--dump", "guide"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search results for 'guide'"))
        .stdout(predicate::str::contains("docs/guide.md"));
}

#[test]
fn test_help_shows_usage() {
    Command::cargo_bin("pgv")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("--dump"));
}

#[test]
fn test_version_output() {
    Command::cargo_bin("pgv")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pgv "));
}

#[test]
fn test_unknown_option_exits_invalid() {
    Command::cargo_bin("pgv")
        .unwrap()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn test_missing_dump_term_exits_invalid() {
    Command::cargo_bin("pgv")
        .unwrap()
        .arg("--dump")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--dump requires a term"));
}

#[test]
fn test_nonexistent_root_exits_invalid() {
    Command::cargo_bin("pgv")
        .unwrap()
        .arg("/does/not/exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}
