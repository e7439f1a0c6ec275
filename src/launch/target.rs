// src/launch/target.rs

use std::path::{Path, PathBuf};

/// Where the companion lives and where the child should run.
///
/// Built from the executable directory found at launch time and never cached
/// across launches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    working_dir: PathBuf,
    companion_path: PathBuf,
}

impl LaunchTarget {
    /// `companion_path` is always `exe_dir.join(companion)`.
    pub fn new(exe_dir: impl Into<PathBuf>, companion: impl AsRef<Path>) -> Self {
        let working_dir = exe_dir.into();
        let companion_path = working_dir.join(companion);
        Self {
            working_dir,
            companion_path,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn companion_path(&self) -> &Path {
        &self.companion_path
    }
}
