//! Resolved directory values.
//!
//! A [`ResolvedDirectories`] is the outcome of one resolution pass. It is
//! immutable; reloading produces a new value.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::platform::Platform;

/// Base directories under which categories of application files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDirectories {
    pub data_home: PathBuf,
    /// Searched after `data_home`, most preferred first.
    pub data_dirs: Vec<PathBuf>,
    pub config_home: PathBuf,
    /// Searched after `config_home`, most preferred first.
    pub config_dirs: Vec<PathBuf>,
    pub state_home: PathBuf,
    pub cache_home: PathBuf,
    pub runtime_dir: PathBuf,
    /// Where application launchers are installed. Not part of the XDG set.
    pub application_dirs: Vec<PathBuf>,
    /// Where fonts are installed. Not part of the XDG set.
    pub font_dirs: Vec<PathBuf>,
}

impl BaseDirectories {
    /// Data home followed by the data directories.
    pub fn data_search_path(&self) -> Vec<PathBuf> {
        prepend(&self.data_home, &self.data_dirs)
    }

    /// Config home followed by the config directories.
    pub fn config_search_path(&self) -> Vec<PathBuf> {
        prepend(&self.config_home, &self.config_dirs)
    }
}

fn prepend(first: &Path, rest: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(rest.len() + 1);
    dirs.push(first.to_path_buf());
    dirs.extend_from_slice(rest);
    dirs
}

/// Well-known personal directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDirectories {
    pub desktop: PathBuf,
    pub download: PathBuf,
    pub documents: PathBuf,
    pub music: PathBuf,
    pub pictures: PathBuf,
    pub videos: PathBuf,
    pub templates: PathBuf,
    pub public_share: PathBuf,
}

/// Names of the user directories, used to select one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserDir {
    Desktop,
    Download,
    Documents,
    Music,
    Pictures,
    Videos,
    Templates,
    PublicShare,
}

impl UserDir {
    pub const ALL: [Self; 8] = [
        Self::Desktop,
        Self::Download,
        Self::Documents,
        Self::Music,
        Self::Pictures,
        Self::Videos,
        Self::Templates,
        Self::PublicShare,
    ];

    /// Key used in `user-dirs.dirs` and as the override variable name.
    pub const fn env_var(self) -> &'static str {
        use crate::env;
        match self {
            Self::Desktop => env::DESKTOP_DIR,
            Self::Download => env::DOWNLOAD_DIR,
            Self::Documents => env::DOCUMENTS_DIR,
            Self::Music => env::MUSIC_DIR,
            Self::Pictures => env::PICTURES_DIR,
            Self::Videos => env::VIDEOS_DIR,
            Self::Templates => env::TEMPLATES_DIR,
            Self::PublicShare => env::PUBLICSHARE_DIR,
        }
    }

    pub fn from_env_var(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.env_var() == key)
    }
}

impl UserDirectories {
    pub fn get(&self, dir: UserDir) -> &Path {
        match dir {
            UserDir::Desktop => &self.desktop,
            UserDir::Download => &self.download,
            UserDir::Documents => &self.documents,
            UserDir::Music => &self.music,
            UserDir::Pictures => &self.pictures,
            UserDir::Videos => &self.videos,
            UserDir::Templates => &self.templates,
            UserDir::PublicShare => &self.public_share,
        }
    }
}

/// Everything computed by one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDirectories {
    /// Layout the values were computed for.
    pub platform: Platform,
    /// Never empty; falls back to the filesystem root.
    pub home: PathBuf,
    pub base: BaseDirectories,
    pub user: UserDirectories,
}

impl ResolvedDirectories {
    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn data_home(&self) -> &Path {
        &self.base.data_home
    }

    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.base.data_dirs
    }

    pub fn config_home(&self) -> &Path {
        &self.base.config_home
    }

    pub fn config_dirs(&self) -> &[PathBuf] {
        &self.base.config_dirs
    }

    pub fn state_home(&self) -> &Path {
        &self.base.state_home
    }

    pub fn cache_home(&self) -> &Path {
        &self.base.cache_home
    }

    pub fn runtime_dir(&self) -> &Path {
        &self.base.runtime_dir
    }

    pub fn application_dirs(&self) -> &[PathBuf] {
        &self.base.application_dirs
    }

    pub fn font_dirs(&self) -> &[PathBuf] {
        &self.base.font_dirs
    }

    pub fn user_dirs(&self) -> &UserDirectories {
        &self.user
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, key: &str, dirs: &[PathBuf]) -> fmt::Result {
    let joined = dirs
        .iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(f, "{key} = [{joined}]")
}

impl fmt::Display for ResolvedDirectories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = &self.base;
        let user = &self.user;

        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "home = {}", self.home.display())?;
        writeln!(f, "data_home = {}", base.data_home.display())?;
        write_list(f, "data_dirs", &base.data_dirs)?;
        writeln!(f, "config_home = {}", base.config_home.display())?;
        write_list(f, "config_dirs", &base.config_dirs)?;
        writeln!(f, "state_home = {}", base.state_home.display())?;
        writeln!(f, "cache_home = {}", base.cache_home.display())?;
        writeln!(f, "runtime_dir = {}", base.runtime_dir.display())?;
        write_list(f, "application_dirs", &base.application_dirs)?;
        write_list(f, "font_dirs", &base.font_dirs)?;
        writeln!(f, "desktop = {}", user.desktop.display())?;
        writeln!(f, "download = {}", user.download.display())?;
        writeln!(f, "documents = {}", user.documents.display())?;
        writeln!(f, "music = {}", user.music.display())?;
        writeln!(f, "pictures = {}", user.pictures.display())?;
        writeln!(f, "videos = {}", user.videos.display())?;
        writeln!(f, "templates = {}", user.templates.display())?;
        write!(f, "public_share = {}", user.public_share.display())
    }
}
