//! XDG Base Directory layout for Linux and the BSDs.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{DirectoryProvider, Platform, home_from};
use crate::env::{self, EnvResolver, Environment};
use crate::pathutil::unique_path_bufs;
use crate::resolved::{BaseDirectories, UserDir, UserDirectories};
use crate::userdirs::{USER_DIRS_FILE, UserDirsConfig, parse_config_file};

/// Parent of the per-user runtime directories created by the login manager.
pub const DEFAULT_RUNTIME_ROOT: &str = "/run/user";

#[derive(Debug, Clone)]
pub struct XdgProvider {
    runtime_root: PathBuf,
    user_dirs_file: Option<PathBuf>,
    uid: u32,
}

impl Default for XdgProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl XdgProvider {
    pub fn new() -> Self {
        Self {
            runtime_root: PathBuf::from(DEFAULT_RUNTIME_ROOT),
            user_dirs_file: None,
            uid: current_uid(),
        }
    }

    /// Look for `<uid>` under `root` instead of `/run/user`.
    #[must_use]
    pub fn with_runtime_root(mut self, root: PathBuf) -> Self {
        self.runtime_root = root;
        self
    }

    /// Read user directory overrides from `path` instead of
    /// `<config home>/user-dirs.dirs`.
    #[must_use]
    pub fn with_user_dirs_file(mut self, path: Option<PathBuf>) -> Self {
        self.user_dirs_file = path;
        self
    }

    #[must_use]
    pub const fn with_uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    /// `/run/user/<uid>` when it is a writable directory, otherwise
    /// `<tmp>/<uid>`.
    fn default_runtime_dir(&self, env: &dyn Environment) -> PathBuf {
        let uid = self.uid.to_string();
        let run_user = self.runtime_root.join(&uid);
        if is_writable_dir(&run_user) {
            return run_user;
        }

        let tmp = env
            .non_empty("TMPDIR")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .unwrap_or_else(|| PathBuf::from("/tmp"));
        debug!(unusable = %run_user.display(), "runtime directory falls back to temp dir");
        tmp.join(uid)
    }

    fn user_dirs_config(&self, home: &Path, base: &BaseDirectories) -> UserDirsConfig {
        let path = self
            .user_dirs_file
            .clone()
            .unwrap_or_else(|| base.config_home.join(USER_DIRS_FILE));

        parse_config_file(&path, home).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable user directories file");
            UserDirsConfig::default()
        })
    }
}

impl DirectoryProvider for XdgProvider {
    fn platform(&self) -> Platform {
        Platform::Xdg
    }

    fn home(&self, env: &dyn Environment) -> PathBuf {
        home_from(env, "HOME", "/")
    }

    fn base_dirs(&self, resolver: EnvResolver<'_>) -> BaseDirectories {
        let home = resolver.home();

        let data_home = resolver.dir(env::DATA_HOME, home.join(".local").join("share"));
        let data_dirs = resolver.dir_list(env::DATA_DIRS, ["/usr/local/share", "/usr/share"]);
        let config_home = resolver.dir(env::CONFIG_HOME, home.join(".config"));
        let config_dirs = resolver.dir_list(env::CONFIG_DIRS, ["/etc/xdg"]);
        let state_home = resolver.dir(env::STATE_HOME, home.join(".local").join("state"));
        let cache_home = resolver.dir(env::CACHE_HOME, home.join(".cache"));
        let runtime_dir = resolver.dir(env::RUNTIME_DIR, self.default_runtime_dir(resolver.env()));

        let data_roots = std::iter::once(&data_home).chain(&data_dirs);
        let application_dirs =
            unique_path_bufs(data_roots.clone().map(|d| d.join("applications")), home);
        let font_dirs = unique_path_bufs(data_roots.map(|d| d.join("fonts")), home);

        BaseDirectories {
            data_home,
            data_dirs,
            config_home,
            config_dirs,
            state_home,
            cache_home,
            runtime_dir,
            application_dirs,
            font_dirs,
        }
    }

    /// Environment variable, then `user-dirs.dirs`, then `~/<Name>`.
    fn user_dirs(&self, resolver: EnvResolver<'_>, base: &BaseDirectories) -> UserDirectories {
        let home = resolver.home();
        let config = self.user_dirs_config(home, base);

        let resolve = |dir: UserDir| {
            let default = config
                .get(dir)
                .filter(|p| p.is_absolute())
                .map_or_else(|| home.join(default_name(dir)), Path::to_path_buf);
            resolver.dir(dir.env_var(), default)
        };

        UserDirectories {
            desktop: resolve(UserDir::Desktop),
            download: resolve(UserDir::Download),
            documents: resolve(UserDir::Documents),
            music: resolve(UserDir::Music),
            pictures: resolve(UserDir::Pictures),
            videos: resolve(UserDir::Videos),
            templates: resolve(UserDir::Templates),
            public_share: resolve(UserDir::PublicShare),
        }
    }
}

/// Directory name under home used when nothing overrides `dir`.
const fn default_name(dir: UserDir) -> &'static str {
    match dir {
        UserDir::Desktop => "Desktop",
        UserDir::Download => "Downloads",
        UserDir::Documents => "Documents",
        UserDir::Music => "Music",
        UserDir::Pictures => "Pictures",
        UserDir::Videos => "Videos",
        UserDir::Templates => "Templates",
        UserDir::PublicShare => "Public",
    }
}

#[cfg(unix)]
fn is_writable_dir(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};

    path.is_dir() && access(path, AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable_dir(path: &Path) -> bool {
    path.is_dir()
}

#[cfg(unix)]
fn current_uid() -> u32 {
    nix::unistd::getuid().as_raw()
}

#[cfg(not(unix))]
const fn current_uid() -> u32 {
    0
}
