//! Create command handler.

use std::io::Write;

use tracing::debug;
use xdgdirs_core::{Directories, Role};

use crate::error::CliError;

/// Resolve where `name` should be written for `role`, creating parents.
pub fn execute(
    dirs: &Directories,
    role: Role,
    name: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let path = dirs.create_file(role, name)?;
    debug!(?role, path = %path.display(), "resolved path for writing");
    super::write_path(out, &path, json)
}
