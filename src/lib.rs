// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod launch;
pub mod logging;

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{LauncherConfig, resolve_config};
use crate::console::{Console, KeyWaiter};
use crate::launch::{
    CurrentExeLocator, ExecutableLocator, Launcher, ProcessSpawner, RealProcessSpawner,
    executable_dir,
};

/// How a single launcher invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    /// The companion process was created.
    Started,
    /// `--dry-run`: the plan was printed and nothing was started.
    DryRun,
    /// The failure was reported to the user.
    Failed,
}

/// High-level entry point used by `main.rs`.
///
/// Runs [`run_with`] against the real executable location, real processes,
/// stdout and the terminal.
///
/// Returns `Err` only when the failure report itself could not be written.
pub fn run(args: CliArgs) -> Result<LaunchStatus> {
    let mut console = Console::stdout();
    Ok(run_with(
        args,
        CurrentExeLocator,
        RealProcessSpawner,
        &mut console,
    )?)
}

/// One launcher invocation with injected collaborators.
///
/// This wires together:
/// - config discovery next to the executable reported by `locator`
/// - the launcher built from `locator` and `spawner`
/// - the console used for the failure report and keypress wait
///
/// Config failures are reported like launch failures, under the default app
/// name. `--no-pause` overrides `pause_on_error` from the config.
pub fn run_with<L, S, W, K>(
    args: CliArgs,
    locator: L,
    spawner: S,
    console: &mut Console<W, K>,
) -> io::Result<LaunchStatus>
where
    L: ExecutableLocator,
    S: ProcessSpawner,
    W: Write,
    K: KeyWaiter,
{
    // A location failure here is reported by the launch attempt below.
    let exe_dir = executable_dir(&locator).ok();

    let config = match resolve_config(args.config.as_deref(), exe_dir.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            debug!(kind = err.kind(), error = %err, "failed to load launcher config");
            let fallback = LauncherConfig::default();
            console.report_failure(fallback.app_name(), &err, !args.no_pause)?;
            return Ok(LaunchStatus::Failed);
        }
    };

    let pause = config.pause_on_error() && !args.no_pause;
    let mut launcher = Launcher::new(locator, spawner, config);

    if args.dry_run {
        return print_dry_run(&launcher, console, pause);
    }

    attempt_launch(&mut launcher, console, pause)
}

/// One launch attempt with the interactive fallback on failure.
///
/// On error the failure is printed to the console and, if `pause` is set,
/// the call blocks until a key is pressed. Nothing is retried.
pub fn attempt_launch<L, S, W, K>(
    launcher: &mut Launcher<L, S>,
    console: &mut Console<W, K>,
    pause: bool,
) -> io::Result<LaunchStatus>
where
    L: ExecutableLocator,
    S: ProcessSpawner,
    W: Write,
    K: KeyWaiter,
{
    match launcher.launch() {
        Ok(()) => Ok(LaunchStatus::Started),
        Err(err) => {
            debug!(kind = err.kind(), error = %err, "launch failed");
            console.report_failure(launcher.config().app_name(), &err, pause)?;
            Ok(LaunchStatus::Failed)
        }
    }
}

/// Print what would be started, without starting it.
pub fn print_dry_run<L, S, W, K>(
    launcher: &Launcher<L, S>,
    console: &mut Console<W, K>,
    pause: bool,
) -> io::Result<LaunchStatus>
where
    L: ExecutableLocator,
    S: ProcessSpawner,
    W: Write,
    K: KeyWaiter,
{
    let request = match launcher.plan() {
        Ok(request) => request,
        Err(err) => {
            debug!(kind = err.kind(), error = %err, "dry-run could not resolve target");
            console.report_failure(launcher.config().app_name(), &err, pause)?;
            return Ok(LaunchStatus::Failed);
        }
    };

    let out = console.out();
    writeln!(out, "pct-launcher dry-run")?;
    writeln!(out, "  app_name    = {}", launcher.config().app_name())?;
    writeln!(out, "  program     = {}", request.program)?;
    for arg in &request.args {
        writeln!(out, "  arg         = {}", arg.to_string_lossy())?;
    }
    writeln!(out, "  working_dir = {}", request.working_dir.display())?;
    out.flush()?;

    debug!("dry-run complete (nothing started)");
    Ok(LaunchStatus::DryRun)
}
