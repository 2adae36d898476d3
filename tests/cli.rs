//! Tests for CLI flag handling.
#![cfg(feature = "cli")]

use clap::Parser;
use routelog::cli::Cli;
use routelog::{Config, Verbosity};

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "routelog",
        "--quiet",
        "--no-color",
        "--no-warnings",
        "--system-log",
        "--bidi",
        "info",
        "hello",
        "world",
    ])
    .unwrap();

    let mut config = Config::default();
    cli.apply(&mut config);

    assert_eq!(config.parse_verbosity(), Verbosity::Quiet);
    assert!(!config.general.color);
    assert!(config.general.no_warnings);
    assert_eq!(config.general.backend, "system");
    assert!(config.bidi.enabled);
    assert_eq!(cli.message.join(" "), "hello world");
}

#[test]
fn verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["routelog", "-v", "-q", "info", "x"]).is_err());
}

#[test]
fn message_is_required() {
    assert!(Cli::try_parse_from(["routelog", "warning"]).is_err());
}

#[test]
fn untouched_flags_keep_config() {
    let cli = Cli::try_parse_from(["routelog", "error", "x"]).unwrap();
    let mut config = Config::parse("[general]\nverbosity = \"verbose\"\ncolor = false\n").unwrap();
    cli.apply(&mut config);
    assert_eq!(config.parse_verbosity(), Verbosity::Verbose);
    assert!(!config.general.color);
}

fn run(args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_routelog"))
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}

#[test]
fn system_backend_from_config_reaches_the_log_facade() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("routelog.toml");
    std::fs::write(&path, "[general]\nbackend = \"system\"\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap(), "error", "boom"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("routelog"));
    assert!(stderr.contains("boom"));
}

#[test]
fn system_log_flag_reaches_the_log_facade() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let output = run(&[
        "--config",
        path.to_str().unwrap(),
        "--system-log",
        "warning",
        "disk full",
    ]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("disk full"));
    assert!(!stderr.contains("WARNING:"));
}
