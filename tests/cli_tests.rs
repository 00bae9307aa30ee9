//! Integration tests for the teamsprite CLI
//!
//! These run the binary and check exit codes for failures that are detected
//! before any network access.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn teamsprite(args: &[&str], cwd: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_teamsprite"))
        .args(args)
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute teamsprite")
}

#[test]
fn test_render_without_names_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let output = teamsprite(&["render"], temp.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_render_with_out_of_range_scale_is_invalid_args() {
    let temp = TempDir::new().unwrap();
    let output = teamsprite(&["render", "pikachu", "--scale", "10"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("customization.scale_percent"), "stderr: {}", stderr);
}

#[test]
fn test_render_with_unknown_layout_is_invalid_args() {
    let temp = TempDir::new().unwrap();
    let output = teamsprite(&["render", "pikachu", "--layout", "circle"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("customization.layout"));
}

#[test]
fn test_invalid_config_file_is_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("teamsprite.toml"), "this is not valid toml {{{").unwrap();

    let output = teamsprite(&["show", "pikachu"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse teamsprite.toml"));
}

#[test]
fn test_explicit_config_with_bad_color_is_invalid_args() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[customization]\nbackground_color = \"#12345\"\n").unwrap();

    let output = teamsprite(&["search", "pika", "--config", config.to_str().unwrap()], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("customization.background_color"));
}
