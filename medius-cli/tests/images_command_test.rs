//! Integration tests for the `medius images` commands
//!
//! Every test runs offline or against an unreachable feed so no network
//! access is needed.

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_medius(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_medius"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn run_json(args: &[&str]) -> Result<Value> {
    let output = run_medius(args)?;
    if !output.status.success() {
        anyhow::bail!(
            "medius {:?} failed:\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(serde_json::from_slice(&output.stdout)?)
}

fn describes(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["describe"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_unfocused_list_skips_cirros() -> Result<()> {
    let listed = run_json(&["--offline", "images", "list", "--json"])?;
    let describes = describes(&listed);

    assert_eq!(describes.len(), 18);
    assert_eq!(describes[0], "rhcos:4.9");
    assert!(!describes.contains(&"cirros:6.1".to_string()));
    Ok(())
}

#[test]
fn test_list_all_marks_selection() -> Result<()> {
    let listed = run_json(&["--offline", "images", "list", "--all", "--json"])?;
    let entries = listed.as_array().unwrap();

    assert_eq!(entries.len(), 19);
    let cirros = entries.last().unwrap();
    assert_eq!(cirros["describe"], "cirros:6.1");
    assert_eq!(cirros["selected"], false);
    assert_eq!(cirros["skipWhenNotFocused"], true);
    Ok(())
}

#[test]
fn test_family_focus() -> Result<()> {
    let listed = run_json(&["--offline", "images", "list", "--focus", "ubuntu:*", "--json"])?;
    assert_eq!(
        describes(&listed),
        vec!["ubuntu:22.04", "ubuntu:20.04", "ubuntu:18.04"]
    );
    Ok(())
}

#[test]
fn test_exact_focus_selects_skipped_entry() -> Result<()> {
    let listed = run_json(&["--offline", "images", "list", "--focus", "cirros:6.1", "--json"])?;
    assert_eq!(describes(&listed), vec!["cirros:6.1"]);
    Ok(())
}

#[test]
fn test_unmatched_focus_is_empty_not_error() -> Result<()> {
    let listed = run_json(&["--offline", "images", "list", "--focus", "debian", "--json"])?;
    assert!(listed.as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_show_entry() -> Result<()> {
    let shown = run_json(&["--offline", "images", "show", "centos-stream:9", "--json"])?;

    assert_eq!(shown["useForDocs"], true);
    assert_eq!(shown["metadata"]["exampleUserData"]["username"], "cloud-user");
    assert_eq!(
        shown["metadata"]["labels"]["instancetype.kubevirt.io/default-preference"],
        "centos.stream9"
    );
    Ok(())
}

#[test]
fn test_show_missing_entry_fails() -> Result<()> {
    let output = run_medius(&["--offline", "images", "show", "debian:12"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found in registry"));
    Ok(())
}

#[test]
fn test_focus_explanation() -> Result<()> {
    let output = run_medius(&["--offline", "images", "focus", "rhcos:*"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("every version of 'rhcos'"));
    assert!(stdout.contains("rhcos:4.12"));
    assert!(!stdout.contains("rhcos-prerelease:latest"));
    Ok(())
}

#[test]
fn test_unreachable_feed_degrades_gracefully() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("medius.yaml");
    std::fs::write(
        &config_path,
        "fedora:\n  releasesUrl: http://127.0.0.1:9/releases.json\n  timeoutSeconds: 2\n",
    )?;

    let output = run_medius(&[
        "--config",
        config_path.to_str().unwrap(),
        "images",
        "list",
        "--json",
    ])?;
    assert!(output.status.success());

    let listed: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listed.as_array().unwrap().len(), 18);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to gather artifacts"));
    // The warning carries the transport cause, not just the outer message
    assert!(stderr.contains("Failed to query release feed http://127.0.0.1:9/releases.json: "));
    Ok(())
}

#[test]
fn test_missing_config_file_fails() -> Result<()> {
    let output = run_medius(&["--config", "/nonexistent/medius.yaml", "images", "list"])?;
    assert!(!output.status.success());
    Ok(())
}
