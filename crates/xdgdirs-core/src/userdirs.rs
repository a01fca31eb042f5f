//! Parser for the `user-dirs.dirs` file written by `xdg-user-dirs-update`.
//!
//! The format is one `XDG_xxx_DIR="value"` assignment per line, with `#`
//! comments. Parsing is deliberately lenient: unknown keys, lines without
//! `=` and values that are not double quoted are skipped without error so
//! that hand-edited files keep working.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DirsError;
use crate::pathutil::expand_home;
use crate::resolved::UserDir;

/// Conventional file name, looked up under the config home.
pub const USER_DIRS_FILE: &str = "user-dirs.dirs";

/// User directory overrides read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirsConfig {
    dirs: HashMap<UserDir, PathBuf>,
}

impl UserDirsConfig {
    pub fn get(&self, dir: UserDir) -> Option<&Path> {
        self.dirs.get(&dir).map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }
}

/// Parse user directory assignments from `reader`.
///
/// Home tokens in values are expanded against `home`. Any read failure,
/// including invalid UTF-8, is returned instead of a partial result.
pub fn parse_config<R: BufRead>(reader: R, home: &Path) -> io::Result<UserDirsConfig> {
    let mut config = UserDirsConfig::default();

    for line in reader.lines() {
        let line = line?;
        if let Some((dir, value)) = parse_line(&line) {
            config.dirs.insert(dir, expand_home(value, home));
        }
    }

    Ok(config)
}

/// Parse the user-dirs file at `path`.
///
/// A file that cannot be opened yields an empty config; only a failure
/// while reading an opened file is an error.
pub fn parse_config_file(path: &Path, home: &Path) -> Result<UserDirsConfig, DirsError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no user directories file");
            return Ok(UserDirsConfig::default());
        }
    };

    parse_config(BufReader::new(file), home).map_err(|source| DirsError::UserDirsRead {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_line(line: &str) -> Option<(UserDir, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || !line.starts_with("XDG_") {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let dir = UserDir::from_env_var(key.trim())?;

    // First quoted run; anything after the closing quote is ignored.
    let quoted = value.trim().strip_prefix('"')?;
    let end = quoted.find('"')?;
    let value = &quoted[..end];
    if value.is_empty() {
        return None;
    }

    Some((dir, value))
}
