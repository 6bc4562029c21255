//! Integration tests for the `ty` CLI.
//!
//! Each test creates a temp data directory, runs `ty` as a subprocess,
//! and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tally::util::dates::{date_key, today};

/// Get the path to the built `ty` binary.
fn ty_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ty");
    path
}

/// Run `ty -C <data_dir>` with the given args, returning (stdout, stderr, success).
fn run_ty(data_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ty_bin())
        .arg("-C")
        .arg(data_dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run ty");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ty` expecting success, return stdout.
fn run_ty_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ty(data_dir, args);
    if !success {
        panic!(
            "ty {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn yesterday_key() -> String {
    date_key(today().pred_opt().unwrap())
}

// ---------------------------------------------------------------------------
// List and add
// ---------------------------------------------------------------------------

#[test]
fn test_list_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ty_ok(tmp.path(), &["list"]);
    assert!(out.contains("no habits yet"));
}

#[test]
fn test_add_and_list() {
    let tmp = tempfile::TempDir::new().unwrap();

    run_ty_ok(tmp.path(), &["add", "Read"]);
    run_ty_ok(tmp.path(), &["add", "Run"]);

    let out = run_ty_ok(tmp.path(), &["list"]);
    assert!(out.contains("Read"));
    assert!(out.contains("Run"));
    assert!(out.contains("streak"));
    assert!(!out.contains("no habits yet"));
}

#[test]
fn test_add_prints_the_new_id() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ty_ok(tmp.path(), &["add", "Read"]);
    let id = out.trim();
    assert!(!id.is_empty());

    let state: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("state.json")).unwrap()).unwrap();
    assert_eq!(state["habits"][0]["id"], id);
    assert_eq!(state["habits"][0]["name"], "Read");
}

#[test]
fn test_add_rejects_blank_name() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_stdout, stderr, success) = run_ty(tmp.path(), &["add", "   "]);
    assert!(!success);
    assert!(stderr.contains("error"));
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    let out = run_ty_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed["today"], date_key(today()));
    let week = parsed["week"].as_array().unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[6].as_str().unwrap(), date_key(today()));

    let habits = parsed["habits"].as_array().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["name"], "Read");
    assert_eq!(habits[0]["streak"], 0);
    assert_eq!(habits[0]["days"].as_array().unwrap().len(), 7);
}

// ---------------------------------------------------------------------------
// Tick / untick / toggle / streak
// ---------------------------------------------------------------------------

#[test]
fn test_tick_builds_a_streak() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    run_ty_ok(tmp.path(), &["tick", "Read"]);
    let out = run_ty_ok(tmp.path(), &["streak", "Read"]);
    assert_eq!(out.trim(), "1");

    run_ty_ok(tmp.path(), &["tick", "Read", "--date", &yesterday_key()]);
    let out = run_ty_ok(tmp.path(), &["streak", "Read"]);
    assert_eq!(out.trim(), "2");
}

#[test]
fn test_streak_is_zero_without_today() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    // Yesterday only: no streak, history notwithstanding
    run_ty_ok(tmp.path(), &["tick", "Read", "--date", &yesterday_key()]);
    let out = run_ty_ok(tmp.path(), &["streak", "Read"]);
    assert_eq!(out.trim(), "0");
}

#[test]
fn test_untick_clears_the_day() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    run_ty_ok(tmp.path(), &["tick", "Read"]);
    run_ty_ok(tmp.path(), &["untick", "Read"]);
    let out = run_ty_ok(tmp.path(), &["streak", "Read"]);
    assert_eq!(out.trim(), "0");
}

#[test]
fn test_toggle_twice_returns_to_falsy() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    run_ty_ok(tmp.path(), &["toggle", "Read"]);
    run_ty_ok(tmp.path(), &["toggle", "Read"]);

    let out = run_ty_ok(tmp.path(), &["streak", "Read"]);
    assert_eq!(out.trim(), "0");

    let state: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("state.json")).unwrap()).unwrap();
    assert_eq!(state["habits"][0]["log"][date_key(today())], false);
}

#[test]
fn test_streak_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);
    run_ty_ok(tmp.path(), &["tick", "Read"]);

    let out = run_ty_ok(tmp.path(), &["streak", "Read", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["name"], "Read");
    assert_eq!(parsed["streak"], 1);
}

#[test]
fn test_tick_rejects_bad_date() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    let (_stdout, stderr, success) = run_ty(tmp.path(), &["tick", "Read", "--date", "08/24/2026"]);
    assert!(!success);
    assert!(stderr.contains("invalid date"));
}

// ---------------------------------------------------------------------------
// Name resolution
// ---------------------------------------------------------------------------

#[test]
fn test_lookup_is_case_insensitive() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    run_ty_ok(tmp.path(), &["tick", "read"]);
    let out = run_ty_ok(tmp.path(), &["streak", "READ"]);
    assert_eq!(out.trim(), "1");
}

#[test]
fn test_unknown_name_errors() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_stdout, stderr, success) = run_ty(tmp.path(), &["streak", "nope"]);
    assert!(!success);
    assert!(stderr.contains("habit not found"));
}

#[test]
fn test_duplicate_names_are_ambiguous() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);
    run_ty_ok(tmp.path(), &["add", "read"]);

    let (_stdout, stderr, success) = run_ty(tmp.path(), &["tick", "Read"]);
    assert!(!success);
    assert!(stderr.contains("more than one habit"));
}

// ---------------------------------------------------------------------------
// Delete / reset
// ---------------------------------------------------------------------------

#[test]
fn test_delete_removes_exactly_the_target() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);
    run_ty_ok(tmp.path(), &["add", "Run"]);
    run_ty_ok(tmp.path(), &["add", "Stretch"]);

    run_ty_ok(tmp.path(), &["delete", "Run", "--yes"]);

    let out = run_ty_ok(tmp.path(), &["list"]);
    assert!(out.contains("Read"));
    assert!(out.contains("Stretch"));
    assert!(!out.contains("Run"));
}

#[test]
fn test_delete_without_yes_cancels_on_eof() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    // stdin is null, so the [y/n] prompt reads EOF and cancels
    let out = run_ty_ok(tmp.path(), &["delete", "Read"]);
    assert!(out.contains("cancelled"));

    let list = run_ty_ok(tmp.path(), &["list"]);
    assert!(list.contains("Read"));
}

#[test]
fn test_reset_persists_an_empty_state() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);
    run_ty_ok(tmp.path(), &["tick", "Read"]);

    let out = run_ty_ok(tmp.path(), &["reset", "--yes"]);
    assert!(out.contains("All data reset."));

    let state: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("state.json")).unwrap()).unwrap();
    assert_eq!(state["habits"].as_array().unwrap().len(), 0);

    let list = run_ty_ok(tmp.path(), &["list"]);
    assert!(list.contains("no habits yet"));
}

// ---------------------------------------------------------------------------
// Import / export
// ---------------------------------------------------------------------------

#[test]
fn test_import_rejects_bad_documents() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Keep me"]);

    for bad in [
        "{ not json",
        r#"{"habits": 42}"#,
        r#"{"totally": "unrelated"}"#,
        r#"[]"#,
    ] {
        let file = tmp.path().join("bad.json");
        fs::write(&file, bad).unwrap();
        let (_stdout, stderr, success) = run_ty(tmp.path(), &["import", file.to_str().unwrap()]);
        assert!(!success, "import accepted: {}", bad);
        assert!(stderr.contains("import failed"));
    }

    // Existing state untouched through all the failures
    let out = run_ty_ok(tmp.path(), &["list"]);
    assert!(out.contains("Keep me"));
}

#[test]
fn test_import_replaces_state_and_keeps_foreign_ids() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Old"]);

    let file = tmp.path().join("incoming.json");
    fs::write(
        &file,
        format!(
            r#"{{"habits":[{{"id":"x","name":"Imported","log":{{"{}":true}}}}]}}"#,
            date_key(today())
        ),
    )
    .unwrap();

    let out = run_ty_ok(tmp.path(), &["import", file.to_str().unwrap()]);
    assert!(out.contains("Import complete. Data loaded."));

    let list = run_ty_ok(tmp.path(), &["list"]);
    assert!(list.contains("Imported"));
    assert!(!list.contains("Old"));

    let streak = run_ty_ok(tmp.path(), &["streak", "Imported"]);
    assert_eq!(streak.trim(), "1");
}

#[test]
fn test_export_writes_pretty_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["add", "Read"]);

    let target = tmp.path().join("out.json");
    run_ty_ok(tmp.path(), &["export", target.to_str().unwrap()]);

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.contains('\n')); // pretty-printed
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["habits"][0]["name"], "Read");
}

// ---------------------------------------------------------------------------
// Init / state file handling
// ---------------------------------------------------------------------------

#[test]
fn test_init_seeds_the_data_directory() {
    let tmp = tempfile::TempDir::new().unwrap();
    let data = tmp.path().join("data");

    let out = run_ty_ok(&data, &["init"]);
    assert!(out.contains("Initialized"));

    let config_text = fs::read_to_string(data.join("config.toml")).unwrap();
    let parsed: toml::Value = toml::from_str(&config_text).unwrap();
    assert!(parsed.get("ui").is_some());

    let state: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data.join("state.json")).unwrap()).unwrap();
    assert_eq!(state["habits"].as_array().unwrap().len(), 0);
}

#[test]
fn test_init_refuses_to_clobber_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_ty_ok(tmp.path(), &["init"]);

    let (_stdout, stderr, success) = run_ty(tmp.path(), &["init"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));

    run_ty_ok(tmp.path(), &["init", "--force"]);
}

#[test]
fn test_corrupt_state_file_reads_as_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("state.json"), "{ definitely not json").unwrap();

    let out = run_ty_ok(tmp.path(), &["list"]);
    assert!(out.contains("no habits yet"));
}

#[test]
fn test_data_dir_from_env() {
    let tmp = tempfile::TempDir::new().unwrap();

    let output = Command::new(ty_bin())
        .args(["add", "Read"])
        .env("TALLY_DIR", tmp.path())
        .stdin(Stdio::null())
        .output()
        .expect("failed to run ty");
    assert!(output.status.success());

    assert!(tmp.path().join("state.json").exists());
}

#[test]
fn test_help() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ty_ok(tmp.path(), &["--help"]);
    assert!(out.contains("tally"));
    assert!(out.contains("add"));
    assert!(out.contains("list"));
}
