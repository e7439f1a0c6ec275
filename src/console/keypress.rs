// src/console/keypress.rs

//! Blocking "press any key" wait.

use std::io::{self, IsTerminal, Read};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::debug;

/// Blocks until the user presses a key.
pub trait KeyWaiter {
    fn wait_for_key(&mut self) -> io::Result<()>;
}

/// Waits on the real terminal.
///
/// With a terminal on stdin, raw mode makes any single key count, not just
/// Enter. Without one (piped or redirected stdin), a single byte is read and
/// end-of-input also ends the wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalKeyWaiter;

impl KeyWaiter for TerminalKeyWaiter {
    fn wait_for_key(&mut self) -> io::Result<()> {
        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal; reading a single byte");
            let mut buf = [0u8; 1];
            let read = io::stdin().read(&mut buf)?;
            debug!(bytes = read, "input received");
            return Ok(());
        }

        enable_raw_mode()?;
        let result = read_key_press();
        // Restore the terminal even when reading failed.
        let restored = disable_raw_mode();
        result?;
        restored
    }
}

fn read_key_press() -> io::Result<()> {
    loop {
        // Windows reports both press and release; only a press counts.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            _ => {}
        }
    }
}
