#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use pct_launcher::errors::LaunchError;
use pct_launcher::launch::{Launcher, RealProcessSpawner};
use pct_launcher_test_utils::builders::LauncherConfigBuilder;
use pct_launcher_test_utils::fakes::FixedLocator;
use pct_launcher_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn sh_launcher(dir: &Path, companion: &str) -> Launcher<FixedLocator, RealProcessSpawner> {
    Launcher::new(
        FixedLocator::new(dir.join("app.bin")),
        RealProcessSpawner,
        LauncherConfigBuilder::new()
            .interpreter("sh")
            .companion(companion)
            .build(),
    )
}

#[test]
fn test_launch_returns_without_waiting_for_child() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    fs::write(dir.path().join("main.sh"), "sleep 5\n")?;
    let mut launcher = sh_launcher(dir.path(), "main.sh");

    let started = Instant::now();
    launcher.launch()?;
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_secs(3),
        "launch blocked on the child for {elapsed:?}"
    );
    Ok(())
}

#[test]
fn test_child_runs_in_executable_directory() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("main.sh"), "pwd > cwd.txt\n")?;
    let mut launcher = sh_launcher(dir.path(), "main.sh");

    launcher.launch()?;

    let marker = dir.path().join("cwd.txt");
    let deadline = Instant::now() + Duration::from_secs(5);
    while !marker_written(&marker) && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(20));
    }

    let cwd = fs::read_to_string(&marker)?;
    assert_eq!(
        fs::canonicalize(cwd.trim())?,
        fs::canonicalize(dir.path())?
    );
    Ok(())
}

fn marker_written(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|s| s.ends_with('\n'))
        .unwrap_or(false)
}

#[test]
fn test_missing_interpreter_forwards_os_message() -> TestResult {
    let dir = TempDir::new()?;
    let mut launcher = Launcher::new(
        FixedLocator::new(dir.path().join("app.bin")),
        RealProcessSpawner,
        LauncherConfigBuilder::new()
            .interpreter("pct-launcher-no-such-interpreter")
            .build(),
    );

    let err = launcher.launch().unwrap_err();
    let message = err.to_string();
    match err {
        LaunchError::ProcessStart { program, source } => {
            assert_eq!(program, "pct-launcher-no-such-interpreter");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            assert_eq!(message, source.to_string());
        }
        other => panic!("Expected ProcessStart error, got: {:?}", other),
    }
    Ok(())
}
