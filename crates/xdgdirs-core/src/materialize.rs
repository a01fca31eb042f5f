//! Turning a relative file name into a concrete path under one of an
//! ordered list of base directories.
//!
//! Neither operation locks or retries. Concurrent `create_path` calls for
//! the same name may race on directory creation, which is harmless because
//! creating an existing directory is not an error.

use std::fs::DirBuilder;
use std::path::{Component, Path, PathBuf};

use tracing::trace;

use crate::error::DirsError;
use crate::pathutil::path_exists;

/// Return `<candidate>/<name>` for the first candidate whose parent
/// directory exists or can be created.
///
/// Existence of the parent is enough; writability is not checked. Missing
/// parents are created with mode `0700` on POSIX.
pub fn create_path<P: AsRef<Path>>(name: &str, candidates: &[P]) -> Result<PathBuf, DirsError> {
    check_name(name)?;

    let mut tried = Vec::with_capacity(candidates.len());
    for base in candidates {
        let path = base.as_ref().join(name);
        let Some(dir) = path.parent().map(Path::to_path_buf) else {
            continue;
        };

        if path_exists(&dir) {
            trace!(path = %path.display(), "parent exists");
            return Ok(path);
        }

        match dir_builder().create(&dir) {
            Ok(()) => {
                trace!(dir = %dir.display(), "created parent");
                return Ok(path);
            }
            Err(e) => trace!(dir = %dir.display(), error = %e, "cannot create parent"),
        }
        tried.push(dir);
    }

    Err(DirsError::NoWritableLocation {
        name: PathBuf::from(name),
        tried,
    })
}

/// Return `<candidate>/<name>` for the first candidate under which it
/// already exists.
pub fn search_path<P: AsRef<Path>>(name: &str, candidates: &[P]) -> Result<PathBuf, DirsError> {
    check_name(name)?;

    let mut searched = Vec::with_capacity(candidates.len());
    for base in candidates {
        let path = base.as_ref().join(name);
        if path_exists(&path) {
            return Ok(path);
        }
        trace!(path = %path.display(), "not found");
        searched.push(path.parent().map_or_else(|| path.clone(), Path::to_path_buf));
    }

    Err(DirsError::NotFound {
        name: PathBuf::from(name),
        searched,
    })
}

/// `name` must be non-empty and relative so joining keeps it under the
/// candidate.
fn check_name(name: &str) -> Result<(), DirsError> {
    if name.is_empty() {
        return Err(DirsError::EmptyName);
    }

    let rooted = Path::new(name)
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
    if rooted {
        return Err(DirsError::AbsoluteName(PathBuf::from(name)));
    }

    Ok(())
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn create_then_search_round_trip() {
        let root = tempdir().unwrap();
        let dirs = [root.path().join("first"), root.path().join("second")];

        let created = create_path("appname/app.data", &dirs).unwrap();
        assert_eq!(created, dirs[0].join("appname/app.data"));
        assert!(created.parent().unwrap().is_dir());

        fs::write(&created, b"data").unwrap();
        assert_eq!(search_path("appname/app.data", &dirs).unwrap(), created);

        fs::remove_file(&created).unwrap();
        assert!(search_path("appname/app.data", &dirs).is_err());
        assert_eq!(create_path("appname/app.data", &dirs).unwrap(), created);
    }

    #[test]
    fn search_returns_first_match_in_order() {
        let root = tempdir().unwrap();
        let dirs = [root.path().join("a"), root.path().join("b")];
        fs::create_dir_all(dirs[1].join("app")).unwrap();
        fs::write(dirs[1].join("app/x.conf"), b"").unwrap();

        assert_eq!(search_path("app/x.conf", &dirs).unwrap(), dirs[1].join("app/x.conf"));

        fs::create_dir_all(dirs[0].join("app")).unwrap();
        fs::write(dirs[0].join("app/x.conf"), b"").unwrap();
        assert_eq!(search_path("app/x.conf", &dirs).unwrap(), dirs[0].join("app/x.conf"));
    }

    #[test]
    fn search_error_lists_parent_directories() {
        let root = tempdir().unwrap();
        let dirs = [root.path().join("a"), root.path().join("b")];

        let err = search_path("app/missing.conf", &dirs).unwrap_err();
        assert_eq!(err.attempted(), &[dirs[0].join("app"), dirs[1].join("app")]);
        assert!(err.to_string().contains("missing.conf"));
    }

    #[test]
    fn create_skips_candidates_that_cannot_hold_directories() {
        let root = tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let dirs = [blocker.clone(), root.path().join("ok")];

        let created = create_path("app/file", &dirs).unwrap();
        assert_eq!(created, root.path().join("ok/app/file"));

        let err = create_path("app/file", &[blocker.clone()]).unwrap_err();
        assert_eq!(err.attempted(), &[blocker.join("app")]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let root = tempdir().unwrap();
        assert!(matches!(
            create_path("", &[root.path()]),
            Err(DirsError::EmptyName)
        ));
        assert!(matches!(
            search_path("", &[root.path()]),
            Err(DirsError::EmptyName)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_names_stay_inside_candidates() {
        let root = tempdir().unwrap();
        let other = tempdir().unwrap();
        let outside = other.path().join("app/x.conf");
        fs::create_dir_all(outside.parent().unwrap()).unwrap();
        fs::write(&outside, b"").unwrap();
        let name = outside.to_string_lossy();

        assert!(matches!(
            create_path(&name, &[root.path()]),
            Err(DirsError::AbsoluteName(_))
        ));
        assert!(matches!(
            search_path(&name, &[root.path()]),
            Err(DirsError::AbsoluteName(_))
        ));
        assert!(matches!(
            search_path("/etc/passwd", &[root.path()]),
            Err(DirsError::AbsoluteName(_))
        ));
        assert!(!root.path().join("app").exists());
    }

    #[cfg(unix)]
    #[test]
    fn created_parents_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir().unwrap();
        let created = create_path("private/app.sock", &[root.path()]).unwrap();
        let mode = fs::metadata(created.parent().unwrap()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
