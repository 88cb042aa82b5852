//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated data directory and verify
//! outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with `home` as the data directory.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_campus-cli"))
        .args(args)
        .env("CAMPUS_ASSISTANT_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command {args:?} failed: {stderr}");
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_calendar_show_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["calendar", "show", "--month", "4", "--year", "2026", "--json"],
    );
    let view = parse_json(&out);
    assert_eq!(view["grid"]["title"], "April 2026");
    assert_eq!(view["grid"]["month"], 3);
    assert_eq!(view["grid"]["cells"].as_array().unwrap().len(), 42);
    let events = view["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["name"], "Spring Break");
    assert_eq!(events[0]["kind"], "holiday");
    assert_eq!(events[0]["date"], "2026-04-01");
}

#[test]
fn test_calendar_show_text() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["calendar", "show", "--month", "2", "--year", "2026"]);
    assert!(out.contains("February 2026"));
    assert!(out.contains(" Sun   Mon"));
    assert!(out.contains("Feb 14  Valentine's Day (holiday)"));
}

#[test]
fn test_calendar_show_offset_wraps_year() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["calendar", "show", "--month", "12", "--year", "2026", "--offset", "1", "--json"],
    );
    assert_eq!(parse_json(&out)["grid"]["title"], "January 2027");

    let out = run_cli_success(
        home.path(),
        &["calendar", "show", "--month", "1", "--year", "2026", "--offset", "-1", "--json"],
    );
    let view = parse_json(&out);
    assert_eq!(view["grid"]["title"], "December 2025");
    assert!(view["events"].as_array().unwrap().is_empty());
}

#[test]
fn test_calendar_events_empty_month() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["calendar", "events", "--month", "8", "--year", "2026"],
    );
    assert!(out.contains("August 2026"));
    assert!(out.contains("No events this month"));
}

#[test]
fn test_calendar_events_json_sorted() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["calendar", "events", "--month", "12", "--year", "2026", "--json"],
    );
    let events = parse_json(&out);
    let dates: Vec<_> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2026-12-01", "2026-12-15", "2026-12-25", "2026-12-31"]);
}

#[test]
fn test_calendar_rejects_month_13() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["calendar", "show", "--month", "13"]);
    assert_ne!(code, 0);
}

#[test]
fn test_calendar_uses_configured_events_file() {
    let home = tempfile::tempdir().unwrap();
    let events = home.path().join("events.toml");
    std::fs::write(
        &events,
        "[events]\n\"2026-08-20\" = { kind = \"exam\", name = \"Supplementary Exams\" }\n",
    )
    .unwrap();
    run_cli_success(
        home.path(),
        &["config", "set", "calendar.events_file", events.to_str().unwrap()],
    );

    let out = run_cli_success(
        home.path(),
        &["calendar", "events", "--month", "8", "--year", "2026"],
    );
    assert!(out.contains("Aug 20  Supplementary Exams (exam)"));
}

#[test]
fn test_calendar_reports_broken_events_file() {
    let home = tempfile::tempdir().unwrap();
    let events = home.path().join("events.toml");
    std::fs::write(
        &events,
        "[events]\n\"not-a-date\" = { kind = \"exam\", name = \"X\" }\n",
    )
    .unwrap();
    run_cli_success(
        home.path(),
        &["config", "set", "calendar.events_file", events.to_str().unwrap()],
    );

    let (_, stderr, code) = run_cli(home.path(), &["calendar", "events"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_chat_ask_admission_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["chat", "ask", "I", "want", "to", "apply", "for", "admission", "--json"],
    );
    let reply = parse_json(&out);
    assert_eq!(reply["topic"], "admission");
    assert!(reply["response"]
        .as_str()
        .unwrap()
        .starts_with("Our admission process is simple!"));
}

#[test]
fn test_chat_ask_placement() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["chat", "ask", "what is the job placement rate"]);
    assert!(out.starts_with("Excellent placement record:"));
}

#[test]
fn test_chat_ask_fallback() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["chat", "ask", "asdfghjkl", "--json"]);
    let reply = parse_json(&out);
    assert!(reply["topic"].is_null());
    assert!(reply["response"]
        .as_str()
        .unwrap()
        .starts_with("Thank you for your question!"));
}

#[test]
fn test_chat_topics_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["chat", "topics", "--json"]);
    let topics = parse_json(&out);
    let ids: Vec<_> = topics
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["admission", "courses", "fees", "exam", "faculty", "placement"]);
}

#[test]
fn test_chat_repl_reads_stdin() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "chat.simulate_typing", "false"]);

    let mut child = Command::new(env!("CARGO_BIN_EXE_campus-cli"))
        .args(["chat", "repl"])
        .env("CAMPUS_ASSISTANT_HOME", home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"how much is tuition\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Our fee structure for 2026"));
}

#[test]
fn test_config_get_set_reset() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "chat.typing_delay_min_ms"]).trim(),
        "1500"
    );

    assert_eq!(
        run_cli_success(home.path(), &["config", "set", "ui.dark_mode", "true"]).trim(),
        "ok"
    );
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "ui.dark_mode"]).trim(),
        "true"
    );
    assert!(home.path().join("config.toml").exists());

    run_cli_success(home.path(), &["config", "reset"]);
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "ui.dark_mode"]).trim(),
        "false"
    );
}

#[test]
fn test_config_get_unset_path_is_empty() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["config", "get", "calendar.events_file"]);
    assert_eq!(out, "\n");
}

#[test]
fn test_config_list_is_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["config", "list"]);
    let config = parse_json(&out);
    assert_eq!(config["chat"]["simulate_typing"], true);
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "ui.nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));

    let (_, _, code) = run_cli(home.path(), &["config", "get", "ui.nope"]);
    assert_eq!(code, 1);
}
