// src/config/model.rs

use serde::Deserialize;

pub const DEFAULT_APP_NAME: &str = "PC Troubleshooter";
pub const DEFAULT_INTERPRETER: &str = "python";
pub const DEFAULT_COMPANION: &str = "main.py";

/// File name looked up next to the executable when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "launcher.toml";

/// Launcher configuration as read from a TOML file, before validation.
///
/// ```toml
/// app_name = "PC Troubleshooter"
/// interpreter = "python"
/// companion = "main.py"
/// pause_on_error = true
/// ```
///
/// Every key is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLauncherConfig {
    /// Name shown in the failure message.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Program that runs the companion, looked up on the search path.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// File name of the companion, relative to the executable's directory.
    #[serde(default = "default_companion")]
    pub companion: String,

    /// Wait for a keypress after printing a failure.
    #[serde(default = "default_pause_on_error")]
    pub pause_on_error: bool,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

fn default_companion() -> String {
    DEFAULT_COMPANION.to_string()
}

fn default_pause_on_error() -> bool {
    true
}

impl Default for RawLauncherConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            interpreter: default_interpreter(),
            companion: default_companion(),
            pause_on_error: default_pause_on_error(),
        }
    }
}

/// Validated launcher configuration.
///
/// Only obtainable through `TryFrom<RawLauncherConfig>` (see `validate.rs`)
/// or `Default`, so `companion` always stays inside the executable's
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    app_name: String,
    interpreter: String,
    companion: String,
    pause_on_error: bool,
}

impl LauncherConfig {
    pub(crate) fn new_unchecked(raw: RawLauncherConfig) -> Self {
        Self {
            app_name: raw.app_name,
            interpreter: raw.interpreter,
            companion: raw.companion,
            pause_on_error: raw.pause_on_error,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn companion(&self) -> &str {
        &self.companion
    }

    pub fn pause_on_error(&self) -> bool {
        self.pause_on_error
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::new_unchecked(RawLauncherConfig::default())
    }
}
