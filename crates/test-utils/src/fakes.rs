use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pct_launcher::console::KeyWaiter;
use pct_launcher::errors::{LaunchError, Result};
use pct_launcher::launch::{ExecutableLocator, ProcessSpawner, SpawnRequest};

/// Reports a fixed executable path.
///
/// The path can be changed between launches through the shared handle, to
/// simulate the executable being moved.
#[derive(Debug, Clone)]
pub struct FixedLocator {
    exe: Arc<Mutex<PathBuf>>,
}

impl FixedLocator {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self {
            exe: Arc::new(Mutex::new(exe.into())),
        }
    }

    pub fn relocate(&self, exe: impl Into<PathBuf>) {
        *self.exe.lock().unwrap() = exe.into();
    }
}

impl ExecutableLocator for FixedLocator {
    fn current_exe(&self) -> io::Result<PathBuf> {
        Ok(self.exe.lock().unwrap().clone())
    }
}

/// Always fails, like a platform that cannot report the executable path.
#[derive(Debug, Clone, Default)]
pub struct FailingLocator;

impl ExecutableLocator for FailingLocator {
    fn current_exe(&self) -> io::Result<PathBuf> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "executable path unavailable",
        ))
    }
}

/// A fake spawner that records every request and reports success.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpawner {
    requests: Arc<Mutex<Vec<SpawnRequest>>>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<SpawnRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&mut self, request: &SpawnRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// A fake spawner that fails every request with the given OS error.
#[derive(Debug, Clone)]
pub struct FailingSpawner {
    kind: io::ErrorKind,
    message: String,
    attempts: Arc<AtomicUsize>,
}

impl FailingSpawner {
    pub fn new(kind: io::ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Simulates a companion or interpreter that is not on disk.
    pub fn not_found() -> Self {
        Self::new(io::ErrorKind::NotFound, "No such file or directory")
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ProcessSpawner for FailingSpawner {
    fn spawn(&mut self, request: &SpawnRequest) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(LaunchError::ProcessStart {
            program: request.program.clone(),
            source: io::Error::new(self.kind, self.message.clone()),
        })
    }
}

/// Returns immediately and counts how often a key was waited for.
#[derive(Debug, Clone, Default)]
pub struct CountingKeyWaiter {
    waits: Arc<AtomicUsize>,
}

impl CountingKeyWaiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

impl KeyWaiter for CountingKeyWaiter {
    fn wait_for_key(&mut self) -> io::Result<()> {
        self.waits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
