//! Environment access and the two environment-driven resolvers.
//!
//! Every platform initializer reads variables through [`Environment`] so the
//! whole resolution pass can run against a fixed map in tests or when
//! simulating another platform's layout.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::pathutil::{expand_home, unique_paths};

// XDG base directory variables.
pub const DATA_HOME: &str = "XDG_DATA_HOME";
pub const DATA_DIRS: &str = "XDG_DATA_DIRS";
pub const CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
pub const STATE_HOME: &str = "XDG_STATE_HOME";
pub const CACHE_HOME: &str = "XDG_CACHE_HOME";
pub const RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";

// XDG user directory variables.
pub const DESKTOP_DIR: &str = "XDG_DESKTOP_DIR";
pub const DOWNLOAD_DIR: &str = "XDG_DOWNLOAD_DIR";
pub const DOCUMENTS_DIR: &str = "XDG_DOCUMENTS_DIR";
pub const MUSIC_DIR: &str = "XDG_MUSIC_DIR";
pub const PICTURES_DIR: &str = "XDG_PICTURES_DIR";
pub const VIDEOS_DIR: &str = "XDG_VIDEOS_DIR";
pub const TEMPLATES_DIR: &str = "XDG_TEMPLATES_DIR";
pub const PUBLICSHARE_DIR: &str = "XDG_PUBLICSHARE_DIR";

/// Read-only view of environment variables.
pub trait Environment: Send + Sync {
    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` if it is set and not blank.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.trim().is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Resolves single directories and directory lists from the environment,
/// expanding home tokens against a fixed home directory.
#[derive(Clone, Copy)]
pub struct EnvResolver<'a> {
    env: &'a dyn Environment,
    home: &'a Path,
}

impl<'a> EnvResolver<'a> {
    pub fn new(env: &'a dyn Environment, home: &'a Path) -> Self {
        Self { env, home }
    }

    pub fn env(&self) -> &'a dyn Environment {
        self.env
    }

    pub fn home(&self) -> &'a Path {
        self.home
    }

    /// Resolve a single directory from `name`, falling back to `default`.
    ///
    /// Unset, empty, or relative (after expansion) values are rejected and
    /// `default` is returned verbatim.
    pub fn dir(&self, name: &str, default: impl Into<PathBuf>) -> PathBuf {
        if let Some(raw) = self.env.var(name).filter(|v| !v.is_empty()) {
            let expanded = expand_home(&raw, self.home);
            if expanded.is_absolute() {
                return expanded;
            }
            debug!(var = name, value = %raw, "ignoring relative directory");
        }

        default.into()
    }

    /// Resolve a directory list from the delimiter-separated variable
    /// `name`, falling back to `defaults` when it yields nothing usable.
    pub fn dir_list<I, S>(&self, name: &str, defaults: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(raw) = self.env.var(name).filter(|v| !v.is_empty()) {
            let entries = std::env::split_paths(OsStr::new(&raw))
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>();
            let dirs = unique_paths(entries, self.home);
            if !dirs.is_empty() {
                return dirs;
            }
            debug!(var = name, value = %raw, "no absolute entries, using defaults");
        }

        unique_paths(defaults, self.home)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn resolver_with<'a>(env: &'a MapEnv) -> EnvResolver<'a> {
        EnvResolver::new(env, Path::new("/home/alice"))
    }

    #[test]
    fn dir_uses_default_when_unset() {
        let env = MapEnv::new();
        let dir = resolver_with(&env).dir(CONFIG_HOME, "/home/alice/.config");
        assert_eq!(dir, PathBuf::from("/home/alice/.config"));
    }

    #[test]
    fn dir_rejects_relative_value() {
        let env = MapEnv::new().with(CONFIG_HOME, "relative/config");
        let dir = resolver_with(&env).dir(CONFIG_HOME, "/home/alice/.config");
        assert_eq!(dir, PathBuf::from("/home/alice/.config"));
    }

    #[test]
    fn dir_accepts_absolute_and_home_relative_values() {
        let env = MapEnv::new().with(CONFIG_HOME, "/srv/config");
        assert_eq!(
            resolver_with(&env).dir(CONFIG_HOME, "/unused"),
            PathBuf::from("/srv/config")
        );

        let env = MapEnv::new().with(CACHE_HOME, "~/.cache/home");
        assert_eq!(
            resolver_with(&env).dir(CACHE_HOME, "/unused"),
            PathBuf::from("/home/alice/.cache/home")
        );
    }

    #[test]
    fn dir_list_dedups_in_order() {
        let env = MapEnv::new().with(DATA_DIRS, "/a:/b:/a");
        let dirs = resolver_with(&env).dir_list(DATA_DIRS, ["/usr/share"]);
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn dir_list_falls_back_when_all_relative_or_empty() {
        let defaults = ["/usr/local/share", "/usr/share"];
        let expected = vec![PathBuf::from("/usr/local/share"), PathBuf::from("/usr/share")];

        let env = MapEnv::new().with(DATA_DIRS, "rel:other");
        assert_eq!(resolver_with(&env).dir_list(DATA_DIRS, defaults), expected);

        let env = MapEnv::new().with(DATA_DIRS, "");
        assert_eq!(resolver_with(&env).dir_list(DATA_DIRS, defaults), expected);

        let env = MapEnv::new();
        assert_eq!(resolver_with(&env).dir_list(DATA_DIRS, defaults), expected);
    }

    #[test]
    fn dir_list_expands_home_tokens() {
        let env = MapEnv::new().with(CONFIG_DIRS, "~/.config/dirs:/etc/xdg");
        let dirs = resolver_with(&env).dir_list(CONFIG_DIRS, ["/unused"]);
        assert_eq!(
            dirs,
            vec![PathBuf::from("/home/alice/.config/dirs"), PathBuf::from("/etc/xdg")]
        );
    }

    #[test]
    fn non_empty_filters_blank_values() {
        let env = MapEnv::new().with("HOME", "  ");
        assert_eq!(env.non_empty("HOME"), None);
    }
}
