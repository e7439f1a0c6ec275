// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! These flags configure the launcher itself. Nothing here is forwarded to
//! the companion process.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pct-launcher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pct-launcher",
    version,
    about = "Start the companion script that sits next to this executable.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a launcher config file (TOML).
    ///
    /// Default: `launcher.toml` next to the executable, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PCT_LAUNCHER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve the target and print what would be started, without starting it.
    #[arg(long)]
    pub dry_run: bool,

    /// On failure, print the error but do not wait for a keypress.
    #[arg(long)]
    pub no_pause: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
