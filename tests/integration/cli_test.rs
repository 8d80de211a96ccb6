//! CLI round-trip tests
//!
//! Each test gets its own HOME so config and state files stay isolated
//! from the host machine and from each other.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn boardctl(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("boardctl").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn recent_list_starts_empty() {
    let home = TempDir::new().unwrap();
    boardctl(&home)
        .args(["recent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent folders."));
}

#[test]
fn recent_add_then_list_round_trips() {
    let home = TempDir::new().unwrap();

    boardctl(&home)
        .args(["recent", "add", "/projects/alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded /projects/alpha"));

    boardctl(&home)
        .args(["recent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/projects/alpha"));
}

#[test]
fn recent_list_is_newest_first_and_deduplicated() {
    let home = TempDir::new().unwrap();
    for path in ["/a", "/b", "/a"] {
        boardctl(&home)
            .args(["recent", "add", path])
            .assert()
            .success();
    }

    let output = boardctl(&home).args(["recent", "list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("/a"));
    assert!(lines[1].ends_with("/b"));
}

#[test]
fn recent_add_empty_path_stores_nothing() {
    let home = TempDir::new().unwrap();

    boardctl(&home)
        .args(["recent", "add", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to record"));

    boardctl(&home)
        .args(["recent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent folders."));
}

#[test]
fn recent_clear_empties_the_list() {
    let home = TempDir::new().unwrap();
    boardctl(&home)
        .args(["recent", "add", "/projects/alpha"])
        .assert()
        .success();

    boardctl(&home)
        .args(["recent", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent folders cleared."));

    boardctl(&home)
        .args(["recent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent folders."));
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let home = TempDir::new().unwrap();
    boardctl(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:8000"));
}

#[test]
fn config_path_points_into_the_home_dir() {
    let home = TempDir::new().unwrap();
    boardctl(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/boardctl/config.toml"));
}

#[test]
fn config_init_writes_the_default_file_once() {
    let home = TempDir::new().unwrap();

    boardctl(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(home.path().join(".config/boardctl/config.toml").exists());

    // A second init must not clobber an existing file
    boardctl(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    boardctl(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boardctl"));
}
