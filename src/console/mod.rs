// src/console/mod.rs

//! User-facing output for failed launches.
//!
//! A launcher started by double-click has a console window that closes as
//! soon as the process exits. On failure we print the reason and then hold
//! the window open until a key is pressed.

pub mod keypress;
pub mod report;

use std::io::{self, Stdout, Write};

use crate::errors::LaunchError;

pub use keypress::{KeyWaiter, TerminalKeyWaiter};
pub use report::{PRESS_ANY_KEY, failure_line, write_failure};

/// Output stream plus key source used for failure reports.
#[derive(Debug)]
pub struct Console<W, K> {
    out: W,
    keys: K,
}

impl Console<Stdout, TerminalKeyWaiter> {
    /// Real stdout and terminal.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), TerminalKeyWaiter)
    }
}

impl<W: Write, K: KeyWaiter> Console<W, K> {
    pub fn new(out: W, keys: K) -> Self {
        Self { out, keys }
    }

    /// Mutable access to the output stream (used for dry-run output).
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print the failure and, when `pause` is set, prompt and wait for a key.
    pub fn report_failure(
        &mut self,
        app_name: &str,
        err: &LaunchError,
        pause: bool,
    ) -> io::Result<()> {
        write_failure(&mut self.out, app_name, err, pause)?;
        if pause {
            self.keys.wait_for_key()?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (W, K) {
        (self.out, self.keys)
    }
}
