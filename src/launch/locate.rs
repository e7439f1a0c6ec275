// src/launch/locate.rs

//! Finding the directory the launcher binary lives in.

use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{LaunchError, Result};

/// Source of the running executable's path.
///
/// Production code uses [`CurrentExeLocator`]; tests pin the path to a fixed
/// location so relocation can be simulated.
pub trait ExecutableLocator: Debug {
    fn current_exe(&self) -> io::Result<PathBuf>;
}

/// Asks the OS via `std::env::current_exe`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentExeLocator;

impl ExecutableLocator for CurrentExeLocator {
    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}

/// Absolute directory that contains the executable reported by `locator`.
///
/// Queried on every call. The path is made absolute but not canonicalized,
/// so a symlinked launcher resolves relative to the link's directory.
pub fn executable_dir(locator: &dyn ExecutableLocator) -> Result<PathBuf> {
    let exe = locator.current_exe().map_err(|e| {
        LaunchError::LocationResolution(format!("could not determine executable path: {e}"))
    })?;

    let exe = if exe.is_absolute() {
        exe
    } else {
        std::path::absolute(&exe).map_err(|e| {
            LaunchError::LocationResolution(format!(
                "could not make executable path {} absolute: {e}",
                exe.display()
            ))
        })?
    };

    parent_dir(&exe)
}

fn parent_dir(exe: &Path) -> Result<PathBuf> {
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(LaunchError::LocationResolution(format!(
            "executable path {} has no parent directory",
            exe.display()
        ))),
    }
}
