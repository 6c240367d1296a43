use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `todo` command running inside `dir` with no inherited storage override.
fn todo_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TODO_FILE")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

fn data_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("storage").join("todos.json")
}

#[test]
fn no_arguments_prints_hint_and_fails() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .assert()
        .code(1)
        .stdout("Please provide a command. Use --help to see available commands\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn list_on_fresh_directory_creates_file() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("No todo available\n");

    assert_eq!(fs::read_to_string(data_file(&dir)).unwrap(), "[]");
}

#[test]
fn add_prints_and_persists() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .args(["add", "-title", "Buy milk"])
        .assert()
        .success()
        .stdout("ID: 0 | title: Buy milk | status: Pending\n");

    let saved = fs::read_to_string(data_file(&dir)).unwrap();
    assert!(saved.contains("\"Title\":\"Buy milk\""));
    assert!(saved.contains("\"Status\":false"));
}

#[test]
fn add_without_title_fails_and_keeps_file() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .arg("add")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Title required"));

    assert_eq!(fs::read_to_string(data_file(&dir)).unwrap(), "[]");
}

#[test]
fn add_accepts_titles_starting_with_hyphen() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .args(["add", "-title", "-5 minutes walk"])
        .assert()
        .success()
        .stdout("ID: 0 | title: -5 minutes walk | status: Pending\n");

    todo_in(&dir)
        .args(["add", "-title", "-id"])
        .assert()
        .success()
        .stdout(
            "ID: 0 | title: -5 minutes walk | status: Pending\n\
             ID: 1 | title: -id | status: Pending\n",
        );
}

#[test]
fn add_done_delete_round_trip() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .args(["add", "--title", "Buy milk"])
        .assert()
        .success();
    todo_in(&dir)
        .args(["add", "-title=Walk dog"])
        .assert()
        .success();

    todo_in(&dir)
        .args(["done", "-id", "1"])
        .assert()
        .success()
        .stdout(
            "ID: 0 | title: Buy milk | status: Pending\n\
             ID: 1 | title: Walk dog | status: Done\n",
        );

    todo_in(&dir)
        .args(["delete", "-id", "0"])
        .assert()
        .success()
        .stdout("ID: 0 | title: Walk dog | status: Done\n");

    todo_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("ID: 0 | title: Walk dog | status: Done\n");
}

#[test]
fn out_of_range_ids_fail() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .args(["add", "-title", "Only"])
        .assert()
        .success();

    todo_in(&dir)
        .args(["done", "-id", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ID not found"));

    todo_in(&dir)
        .args(["delete", "-id", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ID must be at least 0"));

    todo_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("ID: 0 | title: Only | status: Pending\n");
}

#[test]
fn unknown_command_exits_zero() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("storage")).unwrap();
    fs::write(data_file(&dir), "not json").unwrap();

    todo_in(&dir)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Serialization error"));

    assert_eq!(fs::read_to_string(data_file(&dir)).unwrap(), "not json");
}

#[test]
fn legacy_file_loads() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("storage")).unwrap();
    fs::write(
        data_file(&dir),
        r#"[{"Title":"Old","Status":true}]"#,
    )
    .unwrap();

    todo_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("ID: 0 | title: Old | status: Done\n");
}

#[test]
fn file_flag_and_env_override_location() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("elsewhere").join("list.json");

    todo_in(&dir)
        .args(["add", "-title", "Flag"])
        .arg("-file")
        .arg(&custom)
        .assert()
        .success();

    todo_in(&dir)
        .env("TODO_FILE", &custom)
        .arg("list")
        .assert()
        .success()
        .stdout("ID: 0 | title: Flag | status: Pending\n");

    assert!(!data_file(&dir).exists());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();

    todo_in(&dir)
        .args(["-v", "list"])
        .assert()
        .success()
        .stdout("No todo available\n")
        .stderr(predicate::str::contains("loaded todos"));
}
