//! Search command handler.

use std::io::Write;

use xdgdirs_core::{Directories, Role};

use crate::error::CliError;

/// Print the first existing `name` under the directories of `role`.
pub fn execute(
    dirs: &Directories,
    role: Role,
    name: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let path = dirs.search_file(role, name)?;
    super::write_path(out, &path, json)
}
