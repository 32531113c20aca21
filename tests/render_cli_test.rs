//! End-to-end tests for the cystyle_render binary

use std::fs;
use std::process::Command;

use cystyle::render::{render, NO_JS, NO_MOTD};
use cystyle::theme::ThemeConfig;
use tempfile::TempDir;

fn render_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cystyle_render"))
}

#[test]
fn test_writes_default_theme() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = dir.path().join("out");

    let status = render_bin()
        .arg("--out-dir")
        .arg(&out_dir)
        .status()
        .expect("Failed to run cystyle_render");
    assert!(status.success());

    let expected = render(&ThemeConfig::default());
    let css = fs::read_to_string(out_dir.join("theme.css")).expect("theme.css missing");
    let js = fs::read_to_string(out_dir.join("theme.js")).expect("theme.js missing");
    let motd = fs::read_to_string(out_dir.join("motd.html")).expect("motd.html missing");

    assert_eq!(css, format!("{}\n", expected.css));
    assert_eq!(js.trim_end(), NO_JS);
    assert_eq!(motd.trim_end(), NO_MOTD);
}

#[test]
fn test_renders_config_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = dir.path().join("theme.json");
    fs::write(
        &config_path,
        r#"{
            "motd": { "title": "Welcome" },
            "javascript": { "welcomeMessage": "Hi!" },
            "userStyles": [{ "username": "Bob", "customName": "B.", "hideOriginal": true }]
        }"#,
    )
    .expect("Failed to write config");

    let status = render_bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .expect("Failed to run cystyle_render");
    assert!(status.success());

    let css = fs::read_to_string(dir.path().join("theme.css")).unwrap();
    assert!(css.contains(".chat-msg-bob .username::before"));
    let js = fs::read_to_string(dir.path().join("theme.js")).unwrap();
    assert!(js.contains("alert('Hi!');"));
    let motd = fs::read_to_string(dir.path().join("motd.html")).unwrap();
    assert!(motd.contains("<h1 id=\"motd-title\">Welcome</h1>"));
}

#[test]
fn test_print_to_stdout() {
    let output = render_bin()
        .arg("--print")
        .output()
        .expect("Failed to run cystyle_render");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout not UTF-8");
    assert!(stdout.contains("/* --- Foundation --- */"));
    assert!(stdout.contains(NO_JS));
    assert!(stdout.contains(NO_MOTD));
}

#[test]
fn test_rejects_invalid_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = dir.path().join("bad.json");
    fs::write(&config_path, "{ not json").unwrap();

    let output = render_bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--out-dir")
        .arg(dir.path().join("out"))
        .output()
        .expect("Failed to run cystyle_render");
    assert!(!output.status.success());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_requires_destination() {
    let output = render_bin().output().expect("Failed to run cystyle_render");
    assert!(!output.status.success());
}
