//! Paths command handler.
//!
//! Displays every resolved directory for diagnostics.

use std::io::Write;

use xdgdirs_core::Directories;

use crate::error::CliError;

/// Print the current snapshot in `key = value` form, or as JSON.
pub fn execute(dirs: &Directories, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let snapshot = dirs.snapshot();
    if json {
        serde_json::to_writer_pretty(&mut *out, &*snapshot)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{snapshot}")?;
    }
    Ok(())
}
