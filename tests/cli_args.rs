use std::path::PathBuf;

use clap::Parser;
use pct_launcher::cli::{CliArgs, LogLevel};
use pct_launcher::logging::effective_level;

#[test]
fn test_no_arguments_means_plain_launch() {
    let args = CliArgs::try_parse_from(["pct-launcher"]).unwrap();

    assert!(args.config.is_none());
    assert!(args.log_level.is_none());
    assert!(!args.dry_run);
    assert!(!args.no_pause);
}

#[test]
fn test_all_flags_parse() {
    let args = CliArgs::try_parse_from([
        "pct-launcher",
        "--config",
        "custom.toml",
        "--log-level",
        "debug",
        "--dry-run",
        "--no-pause",
    ])
    .unwrap();

    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.log_level, Some(LogLevel::Debug));
    assert!(args.dry_run);
    assert!(args.no_pause);
}

#[test]
fn test_positional_arguments_are_rejected() {
    // Nothing is forwarded to the companion, so stray arguments are an error.
    let result = CliArgs::try_parse_from(["pct-launcher", "--", "extra"]);
    assert!(result.is_err());
}

#[test]
fn test_log_level_priority() {
    assert_eq!(
        effective_level(Some(LogLevel::Trace), Some("error")),
        tracing::Level::TRACE
    );
    assert_eq!(effective_level(None, Some(" Info ")), tracing::Level::INFO);
    assert_eq!(effective_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(effective_level(None, Some("loud")), tracing::Level::WARN);
    assert_eq!(effective_level(None, None), tracing::Level::WARN);
}
