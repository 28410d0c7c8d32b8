//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify outputs.

use std::io::Write;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_rangepick"))
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn script_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_formats_at_granularity() {
    let (stdout, _, code) = run_cli(&["parse", "2024/06/15 08:30", "--granularity", "month"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "2024-06");
}

#[test]
fn test_parse_reports_invalid_input() {
    let (stdout, _, code) = run_cli(&["parse", "tomorrow", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["value"], "Invalid Date");
    assert_eq!(parsed["valid"], false);
}

#[test]
fn test_presets_with_fixed_today() {
    let (stdout, _, code) = run_cli(&["presets", "--today", "2024-06-15", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let presets = parsed.as_array().unwrap();
    assert_eq!(presets.len(), 6);
    assert_eq!(presets[1]["label"], "Yesterday");
    assert_eq!(presets[1]["resolved_start"], "2024-06-14");
    assert_eq!(presets[2]["resolved_start"], "2024-06-09");
}

#[test]
fn test_presets_reject_bad_today() {
    let (_, stderr, code) = run_cli(&["presets", "--today", "soon"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid --today value"));
}

#[test]
fn test_range_falls_back_on_unreadable_bounds() {
    let (stdout, _, code) = run_cli(&["range", "--granularity", "year", "--min", "invalid"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("min: 1970"));
    assert!(stdout.contains("max: 2470"));
}

#[test]
fn test_simulate_preset_then_confirm() {
    let script = script_file(
        ".toml",
        r#"
        [options]
        fluid_mode = true

        [[events]]
        type = "preset"
        label = "Yesterday"

        [[events]]
        type = "confirm"
        "#,
    );
    let path = script.path().to_str().unwrap();
    let (stdout, stderr, code) = run_cli(&["simulate", path, "--today", "2024-06-15"]);
    assert_eq!(code, 0, "{stderr}");

    let mut lines = stdout.lines();
    let first: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(first["event"]["type"], "PresetApplied");
    assert_eq!(first["callbacks"][0], "on_preset_click");

    let second: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(second["event"]["type"], "Confirmed");
    assert_eq!(second["event"]["start"], "2024-06-14");

    let summary: serde_json::Value =
        serde_json::from_str(&lines.collect::<Vec<_>>().join("\n")).unwrap();
    assert_eq!(summary["valid"], true);
    assert_eq!(summary["selection"]["day"]["end"], "2024-06-14");
}

#[test]
fn test_simulate_json_day_clicks() {
    let script = script_file(
        ".json",
        r#"{
            "events": [
                { "type": "days", "dates": ["2024-06-05"] },
                { "type": "days", "dates": [] },
                { "type": "switch", "granularity": "month" }
            ]
        }"#,
    );
    let path = script.path().to_str().unwrap();
    let (stdout, stderr, code) = run_cli(&["simulate", path]);
    assert_eq!(code, 0, "{stderr}");

    let lines: Vec<&str> = stdout.lines().collect();
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["event"]["start"], "2024-06-05");
    assert_eq!(second["event"]["end"], "2024-06-05");

    // No switch listener without fluid mode.
    let third: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert!(third["event"].is_null());
}

#[test]
fn test_simulate_rejects_unknown_extension() {
    let script = script_file(".yaml", "events: []");
    let path = script.path().to_str().unwrap();
    let (_, stderr, code) = run_cli(&["simulate", path]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}
