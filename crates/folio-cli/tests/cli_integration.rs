//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary")
}

/// Write a script into a temp dir and return its path as a string
fn write_script(dir: &TempDir, name: &str, json: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Demo Command Tests
// ============================================================================

#[test]
fn test_demo_posts_reply_under_alice() {
    let output = cli_cmd().arg("demo").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Reply posted: reply-0"));

    // Bob's reply is listed directly after Alice's comment body
    let lines: Vec<&str> = stdout.lines().collect();
    let alice = lines.iter().position(|l| l.contains("] Alice (")).unwrap();
    assert!(lines[alice + 2].contains("[reply-0] Bob (Just now)"));
    assert!(lines[alice + 3].contains("Thanks!"));
}

#[test]
fn test_demo_shows_visible_success_toast() {
    cli_cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notifications (at 100ms):"))
        .stdout(predicate::str::contains(
            "[success] visible  Your reply has been posted successfully!",
        ));
}

// ============================================================================
// Replay Command Tests
// ============================================================================

#[test]
fn test_replay_switches_widget() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "switch.json",
        r#"[
            { "action": "open_reply", "author": "Alice" },
            { "action": "edit_reply", "field": "body", "value": "draft" },
            { "action": "open_reply", "author": "Marcus" }
        ]"#,
    );

    cli_cmd()
        .args(["replay", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "reply widget opened on comment-1 (closed widget on comment-0)",
        ))
        .stdout(predicate::str::contains("[Reply to Marcus]"))
        .stdout(predicate::str::contains("[Reply to Alice]").not());
}

#[test]
fn test_replay_reports_validation_as_alert_and_continues() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "incomplete.json",
        r#"[
            { "action": "open_reply", "author": "Alice" },
            { "action": "edit_reply", "field": "name", "value": "Bob" },
            { "action": "submit_reply" },
            { "action": "edit_reply", "field": "email", "value": "bob@example.com" },
            { "action": "edit_reply", "field": "body", "value": "Thanks!" },
            { "action": "submit_reply" },
            { "action": "advance", "ms": 100 }
        ]"#,
    );

    cli_cmd()
        .args(["replay", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("3. alert: Please fill in all fields"))
        .stdout(predicate::str::contains("6. reply posted: reply-0"))
        .stdout(predicate::str::contains("[success] visible"));
}

#[test]
fn test_replay_nested_reply_is_info_only() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "nested.json",
        r#"[
            { "action": "open_reply", "author": "Alice" },
            { "action": "edit_reply", "field": "name", "value": "Bob" },
            { "action": "edit_reply", "field": "email", "value": "bob@example.com" },
            { "action": "edit_reply", "field": "body", "value": "Thanks!" },
            { "action": "submit_reply" },
            { "action": "advance", "ms": 6000 },
            { "action": "nested_reply", "author": "Bob" },
            { "action": "advance", "ms": 100 }
        ]"#,
    );

    cli_cmd()
        .args(["replay", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("nested reply refused"))
        .stdout(predicate::str::contains(
            "[info] visible  Nested replies are currently limited to one level.",
        ));
}

#[test]
fn test_replay_contact_form() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "contact.json",
        r#"[
            { "action": "edit_contact", "field": "name", "value": "Dana" },
            { "action": "edit_contact", "field": "email", "value": "dana@example.com" },
            { "action": "submit_contact" },
            { "action": "advance", "ms": 1600 }
        ]"#,
    );

    cli_cmd()
        .args(["replay", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("contact message sending"))
        .stdout(predicate::str::contains("Thank you Dana!"));
}

#[test]
fn test_replay_unknown_author_fails() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "bad.json",
        r#"[{ "action": "open_reply", "author": "Nobody" }]"#,
    );

    cli_cmd()
        .args(["replay", &script])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 1 failed"));
}

#[test]
fn test_replay_malformed_script_fails() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "broken.json", "not json");

    cli_cmd()
        .args(["replay", &script])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn test_replay_missing_file_fails() {
    cli_cmd()
        .args(["replay", "/nonexistent/script.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_prints_defaults() {
    cli_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display_ms\": 5000"))
        .stdout(predicate::str::contains("\"send_delay_ms\": 1500"));
}

#[test]
fn test_config_file_overrides_timings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, r#"{ "notifications": { "show_delay_ms": 0 } }"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"show_delay_ms\": 0"))
        .stdout(predicate::str::contains("\"display_ms\": 5000"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(&path, r#"{ "notifications": { "display_ms": 0 } }"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Help Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("config"));
}
