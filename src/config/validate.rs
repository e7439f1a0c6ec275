// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{LauncherConfig, RawLauncherConfig};
use crate::errors::{LaunchError, Result};

impl TryFrom<RawLauncherConfig> for LauncherConfig {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawLauncherConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(LauncherConfig::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawLauncherConfig) -> Result<()> {
    ensure_non_empty("app_name", &cfg.app_name)?;
    ensure_non_empty("interpreter", &cfg.interpreter)?;
    ensure_non_empty("companion", &cfg.companion)?;
    validate_companion(&cfg.companion)?;
    Ok(())
}

fn ensure_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LaunchError::ConfigError(format!(
            "`{key}` must not be empty"
        )));
    }
    Ok(())
}

/// The companion must resolve to a file under the executable's directory.
fn validate_companion(companion: &str) -> Result<()> {
    for component in Path::new(companion).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(LaunchError::ConfigError(format!(
                    "`companion` must not contain `..` (got '{companion}')"
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(LaunchError::ConfigError(format!(
                    "`companion` must be relative to the launcher directory (got '{companion}')"
                )));
            }
        }
    }
    if Path::new(companion).file_name().is_none() {
        return Err(LaunchError::ConfigError(format!(
            "`companion` must name a file (got '{companion}')"
        )));
    }
    Ok(())
}
