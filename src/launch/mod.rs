// src/launch/mod.rs

//! Locating and starting the companion process.
//!
//! - [`locate`] finds the directory of the running executable.
//! - [`target`] joins that directory with the companion file name.
//! - [`spawn`] provides the `ProcessSpawner` trait and the real,
//!   fire-and-forget `RealProcessSpawner`.
//! - [`launcher`] ties the three together in `Launcher::launch`.

pub mod launcher;
pub mod locate;
pub mod spawn;
pub mod target;

pub use launcher::Launcher;
pub use locate::{CurrentExeLocator, ExecutableLocator, executable_dir};
pub use spawn::{ProcessSpawner, RealProcessSpawner, SpawnRequest};
pub use target::LaunchTarget;
