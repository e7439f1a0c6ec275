// src/launch/launcher.rs

use tracing::{debug, info};

use crate::config::LauncherConfig;
use crate::errors::Result;
use crate::launch::locate::{CurrentExeLocator, ExecutableLocator, executable_dir};
use crate::launch::spawn::{ProcessSpawner, RealProcessSpawner, SpawnRequest};
use crate::launch::target::LaunchTarget;

/// Starts the companion script that sits next to the executable.
#[derive(Debug)]
pub struct Launcher<L = CurrentExeLocator, S = RealProcessSpawner> {
    locator: L,
    spawner: S,
    config: LauncherConfig,
}

impl<L, S> Launcher<L, S>
where
    L: ExecutableLocator,
    S: ProcessSpawner,
{
    pub fn new(locator: L, spawner: S, config: LauncherConfig) -> Self {
        Self {
            locator,
            spawner,
            config,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Resolve the target from the current executable location.
    pub fn resolve_target(&self) -> Result<LaunchTarget> {
        let exe_dir = executable_dir(&self.locator)?;
        let target = LaunchTarget::new(exe_dir, self.config.companion());
        debug!(
            companion = %target.companion_path().display(),
            cwd = %target.working_dir().display(),
            "resolved launch target"
        );
        Ok(target)
    }

    /// The request `launch` would hand to the spawner.
    pub fn plan(&self) -> Result<SpawnRequest> {
        let target = self.resolve_target()?;
        Ok(SpawnRequest::for_target(self.config.interpreter(), &target))
    }

    /// Start the companion and return without waiting on it.
    ///
    /// The companion's existence is not checked first; a missing file shows
    /// up as a spawn error or as an error from the interpreter itself.
    pub fn launch(&mut self) -> Result<()> {
        let request = self.plan()?;
        info!(
            app = %self.config.app_name(),
            program = %request.program,
            "launching companion"
        );
        self.spawner.spawn(&request)
    }
}
