//! Directory-related error types.
//!
//! Resolution itself never fails; these errors only come out of the
//! operations that touch the filesystem (materializing paths, preparing the
//! runtime directory, reading the user-dirs file).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while materializing or locating files.
#[derive(Debug, Error)]
pub enum DirsError {
    /// None of the candidate parent directories exists or could be created.
    #[error("could not create any of the following paths: {}", join_paths(.tried))]
    NoWritableLocation { name: PathBuf, tried: Vec<PathBuf> },

    /// The file does not exist under any of the candidate directories.
    #[error(
        "could not locate `{}` in any of the following paths: {}",
        file_name(.name),
        join_paths(.searched)
    )]
    NotFound { name: PathBuf, searched: Vec<PathBuf> },

    /// The user-dirs file was opened but reading it failed part way.
    #[error("failed to read user directories file {path}: {source}")]
    UserDirsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The runtime directory could not be prepared for use.
    #[error("runtime directory {path} is unusable: {reason}")]
    RuntimeDir { path: PathBuf, reason: String },

    /// An empty relative name was provided.
    #[error("file name cannot be empty")]
    EmptyName,

    /// The name has a root or drive prefix and would escape every
    /// candidate directory.
    #[error("file name must be relative, got {}", .0.display())]
    AbsoluteName(PathBuf),
}

impl DirsError {
    /// Every directory that was tried before giving up, if this error
    /// carries such a list.
    pub fn attempted(&self) -> &[PathBuf] {
        match self {
            Self::NoWritableLocation { tried, .. } => tried,
            Self::NotFound { searched, .. } => searched,
            _ => &[],
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn file_name(name: &Path) -> String {
    name.file_name()
        .map_or_else(|| name.display().to_string(), |n| n.to_string_lossy().into_owned())
}
