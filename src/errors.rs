// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// The running executable's own directory could not be determined.
    #[error("{0}")]
    LocationResolution(String),

    /// The OS refused to start the child process.
    ///
    /// Displays only the platform message, so the user sees the same text the
    /// OS reported (e.g. "No such file or directory").
    #[error("{source}")]
    ProcessStart {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl LaunchError {
    /// Short machine-friendly name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::LocationResolution(_) => "location_resolution",
            LaunchError::ProcessStart { .. } => "process_start",
            LaunchError::ConfigError(_) => "config",
            LaunchError::IoError(_) => "io",
            LaunchError::TomlError(_) => "toml",
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
