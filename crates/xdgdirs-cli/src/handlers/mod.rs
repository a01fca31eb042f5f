//! Command handlers.
//!
//! Each handler takes the [`Directories`](xdgdirs_core::Directories)
//! handle built by `main.rs` and a writer for its output, so it can be
//! driven from tests without touching stdout.

pub mod create;
pub mod paths;
pub mod search;

use std::io::Write;
use std::path::Path;

use crate::error::CliError;

/// Print a single path, either bare or as `{"path": ...}`.
fn write_path(out: &mut impl Write, path: &Path, json: bool) -> Result<(), CliError> {
    if json {
        let value = serde_json::json!({ "path": path });
        writeln!(out, "{value}")?;
    } else {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}
