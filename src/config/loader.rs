// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{CONFIG_FILE_NAME, LauncherConfig, RawLauncherConfig};
use crate::errors::{LaunchError, Result};

/// Load a configuration file from a given path and return the raw
/// `RawLauncherConfig`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] to also
/// check the values.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLauncherConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawLauncherConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LauncherConfig> {
    let raw_config = load_from_path(&path)?;
    let config = LauncherConfig::try_from(raw_config)?;
    Ok(config)
}

/// Path of the config file that sits next to the executable.
pub fn default_config_path(exe_dir: &Path) -> PathBuf {
    exe_dir.join(CONFIG_FILE_NAME)
}

/// Pick the configuration for this run.
///
/// - An explicit path must exist and is always loaded.
/// - Otherwise `launcher.toml` in `exe_dir` is loaded when present.
/// - Otherwise the built-in defaults are used.
///
/// `exe_dir` is `None` when the executable could not be located; the launch
/// itself reports that failure, so here it only means "no local config".
pub fn resolve_config(explicit: Option<&Path>, exe_dir: Option<&Path>) -> Result<LauncherConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(LaunchError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "loading explicit launcher config");
        return load_and_validate(path);
    }

    if let Some(dir) = exe_dir {
        let candidate = default_config_path(dir);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading launcher config next to executable");
            return load_and_validate(&candidate);
        }
    }

    debug!("no launcher config found; using defaults");
    Ok(LauncherConfig::default())
}
