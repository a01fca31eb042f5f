//! Runtime directory preparation.
//!
//! Before anything is placed under the runtime directory it must belong to
//! the current user and must not be a symlink. A missing directory is left
//! for the materializer to create.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::DirsError;

/// Make `dir` safe to materialize runtime files under.
///
/// - missing: nothing to do
/// - directory: ownership is reset to the current uid/gid
/// - anything else (usually a symlink): removed
#[cfg(unix)]
pub fn prepare_runtime_dir(dir: &Path) -> Result<(), DirsError> {
    use nix::unistd::{Gid, Uid, chown};

    let meta = match std::fs::symlink_metadata(dir) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(runtime_error(dir, &e)),
    };

    if meta.is_dir() {
        chown(dir, Some(Uid::current()), Some(Gid::current())).map_err(|e| {
            DirsError::RuntimeDir {
                path: dir.to_path_buf(),
                reason: format!("cannot take ownership: {e}"),
            }
        })?;
        debug!(dir = %dir.display(), "runtime directory ownership verified");
    } else {
        warn!(dir = %dir.display(), "removing non-directory runtime path");
        std::fs::remove_file(dir).map_err(|e| runtime_error(dir, &e))?;
    }

    Ok(())
}

/// Ownership checks are POSIX-only; other hosts use the directory as is.
#[cfg(not(unix))]
pub fn prepare_runtime_dir(dir: &Path) -> Result<(), DirsError> {
    match std::fs::symlink_metadata(dir) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot inspect runtime directory");
            Err(runtime_error(dir, &e))
        }
    }
}

fn runtime_error(dir: &Path, e: &io::Error) -> DirsError {
    DirsError::RuntimeDir {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    }
}
