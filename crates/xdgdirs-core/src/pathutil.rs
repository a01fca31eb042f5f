//! Home-token expansion, path-list deduplication and existence checks.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Leading tokens that stand for the user's home directory.
#[cfg(windows)]
const HOME_TOKENS: &[&str] = &["~", "$HOME", "%USERPROFILE%"];
#[cfg(not(windows))]
const HOME_TOKENS: &[&str] = &["~", "$HOME"];

/// Substitute a leading home token (`~`, `$HOME`) in `path` with `home`.
///
/// The token only matches as a whole component, so `~user/x` and
/// `$HOMEDIR/x` are left alone. Empty `path` or empty `home` pass through
/// unchanged.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path.is_empty() || home.as_os_str().is_empty() {
        return PathBuf::from(path);
    }

    for token in HOME_TOKENS {
        let Some(rest) = path.strip_prefix(token) else {
            continue;
        };
        if rest.is_empty() {
            return home.to_path_buf();
        }
        if rest.starts_with(std::path::is_separator) {
            let rest = rest.trim_start_matches(std::path::is_separator);
            return if rest.is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            };
        }
    }

    PathBuf::from(path)
}

/// Expand and deduplicate an ordered list of paths.
///
/// Entries that are empty or relative after expansion are dropped. The
/// first occurrence of each absolute path wins; order is otherwise kept.
pub fn unique_paths<I, S>(paths: I, home: &Path) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for raw in paths {
        let path = expand_home(raw.as_ref(), home);
        if path.as_os_str().is_empty() || !path.is_absolute() {
            continue;
        }
        if seen.insert(path.clone()) {
            unique.push(path);
        }
    }

    unique
}

/// Same as [`unique_paths`] for values that are already paths.
pub(crate) fn unique_path_bufs<I>(paths: I, home: &Path) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    unique_paths(
        paths
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned()),
        home,
    )
}

/// Whether `path` exists.
///
/// On POSIX symlinks are followed, so a dangling link counts as missing.
/// Windows checks the entry itself.
pub fn path_exists(path: &Path) -> bool {
    #[cfg(windows)]
    {
        std::fs::symlink_metadata(path).is_ok()
    }

    #[cfg(not(windows))]
    {
        std::fs::metadata(path).is_ok()
    }
}
