//! Integration tests for the hxa CLI.

use std::process::Command;
use tempfile::TempDir;

fn hxa_cmd(root: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hxa"));
    cmd.env("HXA_ROOT", root);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_trigger_pretty() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["trigger", "click once delay:1s, keyup[ctrlKey]"])
        .output()
        .expect("failed to run hxa trigger");

    assert!(output.status.success(), "hxa trigger failed: {:?}", output);
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["click once delay:1000ms", "keyup [ctrlKey]"]);
}

#[test]
fn test_trigger_json() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["trigger", "click throttle:1s", "--format", "json"])
        .output()
        .expect("failed to run hxa trigger");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["event_name"], "click");
    assert_eq!(json[0]["modifiers"][0]["Throttle"], 1000);
}

#[test]
fn test_trigger_error_exit_code() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["trigger", "click badmod"])
        .output()
        .expect("failed to run hxa trigger");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1:7: invalid modifier 'badmod'"), "stderr: {}", stderr);
    assert!(stderr.contains("click badmod"));
}

#[test]
fn test_swap_json() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["swap", "innerHTML swap:200ms settle:50ms scroll:top", "-f", "json"])
        .output()
        .expect("failed to run hxa swap");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["strategy"], "InnerHTML");
    assert_eq!(json["swap_delay"], 200);
    assert_eq!(json["settle_delay"], 50);
    assert_eq!(json["scroll"], "top");
    assert_eq!(json["show"], "");
    assert_eq!(json["focus_scroll"], true);
}

#[test]
fn test_swap_uses_config_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        "[swap]\nstrategy = \"OuterHTML\"\nsettle_delay = 20\n",
    )
    .unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["swap", "swap:1s"])
        .output()
        .expect("failed to run hxa swap");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "outerHTML swap:1000ms settle:20ms");
}

#[test]
fn test_sync() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["sync", "queue:last"])
        .output()
        .expect("failed to run hxa sync");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "queue:last");

    let output = hxa_cmd(tmp.path())
        .args(["sync", "sometimes"])
        .output()
        .expect("failed to run hxa sync");
    assert!(!output.status.success());
}

#[test]
fn test_check_manifest() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("attrs.toml");
    std::fs::write(
        &manifest,
        r#"
[[attribute]]
name = "hx-trigger"
value = "click once"

[[attribute]]
name = "hx-sync"
value = "queue:nope"
"#,
    )
    .unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["check", manifest.to_str().unwrap()])
        .output()
        .expect("failed to run hxa check");

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("ok    hx-trigger=\"click once\""));
    assert!(stdout.contains("FAIL  hx-sync=\"queue:nope\""));
    assert!(stdout.contains("2 checked, 1 failed"));
}

#[test]
fn test_check_manifest_json() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("attrs.toml");
    std::fs::write(
        &manifest,
        "[[attribute]]\nname = \"hx-swap\"\nvalue = \"outerHTML\"\n",
    )
    .unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["check", manifest.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("failed to run hxa check");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["parsed"]["kind"], "swap");
    assert_eq!(json[0]["parsed"]["ast"]["strategy"], "OuterHTML");
    assert!(json[0].get("error").is_none());
}

#[test]
fn test_check_missing_file() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["check", tmp.path().join("missing.toml").to_str().unwrap()])
        .output()
        .expect("failed to run hxa check");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not found"));
}

#[test]
fn test_init_writes_config() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("hxa");

    let output = hxa_cmd(&root)
        .args(["init"])
        .output()
        .expect("failed to run hxa init");

    assert!(output.status.success(), "hxa init failed: {:?}", output);
    let contents = std::fs::read_to_string(root.join("config.toml")).unwrap();
    assert!(contents.contains("format = \"pretty\""));

    let output = hxa_cmd(&root)
        .args(["init"])
        .output()
        .expect("failed to run hxa init");
    assert!(stdout_of(&output).contains("already exists"));
}

#[test]
fn test_bad_format_flag() {
    let tmp = TempDir::new().unwrap();

    let output = hxa_cmd(tmp.path())
        .args(["sync", "drop", "--format", "xml"])
        .output()
        .expect("failed to run hxa sync");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown output format"));
}
