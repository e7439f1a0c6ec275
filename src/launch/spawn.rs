// src/launch/spawn.rs

//! Pluggable process creation.
//!
//! The launcher talks to a `ProcessSpawner` instead of `std::process::Command`
//! directly, so tests can record requests or simulate OS failures without
//! starting real processes.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use crate::errors::{LaunchError, Result};
use crate::launch::target::LaunchTarget;

/// Everything needed to start the companion process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Program name, resolved through the OS search path.
    pub program: String,
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

impl SpawnRequest {
    /// `program <companion path>`, run from the target's directory.
    pub fn for_target(program: impl Into<String>, target: &LaunchTarget) -> Self {
        Self {
            program: program.into(),
            args: vec![target.companion_path().as_os_str().to_os_string()],
            working_dir: target.working_dir().to_path_buf(),
        }
    }
}

/// Trait abstracting how the child process is created.
pub trait ProcessSpawner {
    /// Start the process and return as soon as the OS has created it.
    ///
    /// Implementations must not wait for the child or keep a handle to it.
    fn spawn(&mut self, request: &SpawnRequest) -> Result<()>;
}

/// Spawns real OS processes with `std::process::Command`.
///
/// No shell is involved: `program` is executed directly and each argument is
/// passed as one argv entry. Stdio is inherited.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealProcessSpawner;

impl ProcessSpawner for RealProcessSpawner {
    fn spawn(&mut self, request: &SpawnRequest) -> Result<()> {
        let child = Command::new(&request.program)
            .args(&request.args)
            .current_dir(&request.working_dir)
            .spawn()
            .map_err(|source| LaunchError::ProcessStart {
                program: request.program.clone(),
                source,
            })?;

        info!(
            program = %request.program,
            pid = child.id(),
            cwd = %request.working_dir.display(),
            "companion process started"
        );

        // Dropping `Child` neither waits for nor kills the process.
        drop(child);
        Ok(())
    }
}
