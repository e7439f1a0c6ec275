// src/console/report.rs

use std::io::{self, Write};

use crate::errors::LaunchError;

pub const PRESS_ANY_KEY: &str = "Press any key to exit...";

/// `Error launching <app>: <message>`
pub fn failure_line(app_name: &str, err: &LaunchError) -> String {
    format!("Error launching {app_name}: {err}")
}

/// Write the failure line, and the keypress prompt when `prompt` is set.
pub fn write_failure<W: Write + ?Sized>(
    out: &mut W,
    app_name: &str,
    err: &LaunchError,
    prompt: bool,
) -> io::Result<()> {
    writeln!(out, "{}", failure_line(app_name, err))?;
    if prompt {
        writeln!(out, "{PRESS_ANY_KEY}")?;
    }
    out.flush()
}
