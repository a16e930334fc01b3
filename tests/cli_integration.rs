use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// A `todoz` invocation sandboxed to a temp directory: cwd and the home
/// fallback both point inside it, so no test touches the real home store.
fn todoz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.current_dir(dir).env("TODOZ_HOME", dir);
    cmd
}

#[test]
fn add_joins_arguments_and_lists_in_order() {
    let temp = tempfile::tempdir().unwrap();

    todoz(temp.path())
        .args(["add", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: buy milk"));

    todoz(temp.path())
        .args(["add", "walk dog"])
        .assert()
        .success();

    todoz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] buy milk"))
        .stdout(predicate::str::contains("2. [ ] walk dog"));
}

#[test]
fn empty_list_prints_placeholder() {
    let temp = tempfile::tempdir().unwrap();

    todoz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found"));
}

#[test]
fn toggle_marks_and_unmarks_by_index() {
    let temp = tempfile::tempdir().unwrap();
    todoz(temp.path()).args(["add", "buy milk"]).assert().success();

    todoz(temp.path())
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'buy milk' as done"));

    todoz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [x] buy milk"));

    todoz(temp.path())
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'buy milk' as undone"));
}

#[test]
fn edit_replaces_text_by_index() {
    let temp = tempfile::tempdir().unwrap();
    todoz(temp.path()).args(["add", "old"]).assert().success();

    todoz(temp.path())
        .args(["edit", "1", "new", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: new text"));

    todoz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] new text"));
}

#[test]
fn out_of_range_index_fails_with_nonzero_exit() {
    let temp = tempfile::tempdir().unwrap();
    todoz(temp.path()).args(["add", "only one"]).assert().success();

    todoz(temp.path())
        .args(["toggle", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index out of range: 5"));
}

#[test]
fn delete_then_undo_restores_at_the_end() {
    let temp = tempfile::tempdir().unwrap();
    todoz(temp.path()).args(["add", "buy milk"]).assert().success();
    todoz(temp.path()).args(["add", "walk dog"]).assert().success();

    todoz(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: buy milk"));

    todoz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] walk dog"))
        .stdout(predicate::str::contains("buy milk").not());

    todoz(temp.path())
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored: buy milk"));

    todoz(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] walk dog"))
        .stdout(predicate::str::contains("2. [ ] buy milk"));
}

#[test]
fn undo_with_nothing_deleted_fails_gracefully() {
    let temp = tempfile::tempdir().unwrap();

    todoz(temp.path())
        .arg("undo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No recently deleted todos to restore"));
}

#[test]
fn init_creates_local_store_and_refuses_to_repeat() {
    let temp = tempfile::tempdir().unwrap();

    todoz(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized local todo store"));

    assert!(temp.path().join(".todos").is_dir());
    let gitignore = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains(".todos/"));

    todoz(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn local_store_takes_precedence_after_init() {
    let temp = tempfile::tempdir().unwrap();
    todoz(temp.path()).arg("init").assert().success();
    todoz(temp.path()).args(["add", "scoped"]).assert().success();

    assert!(temp.path().join(".todos").join("todos.json").exists());

    todoz(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using LOCAL todo store"))
        .stdout(predicate::str::contains("Total todos: 1"));
}

#[test]
fn status_before_first_write_reports_missing_file() {
    let temp = tempfile::tempdir().unwrap();

    todoz(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using GLOBAL todo store"))
        .stdout(predicate::str::contains("does not exist yet"));
}

#[test]
fn version_prints_the_binary_name_and_version() {
    let temp = tempfile::tempdir().unwrap();

    todoz(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("todoz"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
