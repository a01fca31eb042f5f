//! Per-platform directory layouts.
//!
//! Each OS family implements [`DirectoryProvider`]. A provider is a pure
//! function of the home directory, the environment and whatever platform
//! probes it owns; it never fails and never touches global state.

mod known_folders;
mod macos;
mod plan9;
mod windows;
mod xdg;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::config::DirsConfig;
use crate::env::{EnvResolver, Environment};
use crate::resolved::{BaseDirectories, ResolvedDirectories, UserDirectories};

pub use known_folders::{KnownFolder, KnownFolderProbe, NativeKnownFolders, NoKnownFolders};
pub use macos::MacOsProvider;
pub use plan9::Plan9Provider;
pub use windows::WindowsProvider;
pub use xdg::{DEFAULT_RUNTIME_ROOT, XdgProvider};

#[cfg(test)]
pub use known_folders::MockKnownFolderProbe;

/// OS family whose directory conventions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux and the BSDs: the XDG Base Directory layout.
    Xdg,
    MacOs,
    Windows,
    Plan9,
}

impl Platform {
    /// The family of the host this crate was compiled for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::MacOs
        } else if cfg!(target_os = "plan9") {
            Self::Plan9
        } else {
            Self::Xdg
        }
    }

    /// Whether this layout yields absolute paths on the current host.
    ///
    /// Drive-letter paths are not absolute on POSIX hosts and vice versa,
    /// so the Windows layout can only be produced on Windows.
    pub const fn runs_on_host(self) -> bool {
        matches!(self, Self::Windows) == cfg!(windows)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xdg => "xdg",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Plan9 => "plan9",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized platform name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown platform `{0}` (expected xdg, macos, windows or plan9)")]
pub struct ParsePlatformError(String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xdg" | "linux" | "bsd" | "unix" => Ok(Self::Xdg),
            "macos" | "darwin" | "osx" => Ok(Self::MacOs),
            "windows" | "win" => Ok(Self::Windows),
            "plan9" => Ok(Self::Plan9),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

/// Computes every directory for one OS family.
pub trait DirectoryProvider: Send + Sync {
    fn platform(&self) -> Platform;

    /// Home directory; never empty.
    fn home(&self, env: &dyn Environment) -> PathBuf;

    fn base_dirs(&self, resolver: EnvResolver<'_>) -> BaseDirectories;

    /// User directories. `base` is available for layouts that read
    /// overrides from under the config home.
    fn user_dirs(&self, resolver: EnvResolver<'_>, base: &BaseDirectories) -> UserDirectories;

    /// Run a full resolution pass against `env`.
    fn resolve(&self, env: &dyn Environment) -> ResolvedDirectories {
        let home = self.home(env);
        let resolver = EnvResolver::new(env, &home);
        let base = self.base_dirs(resolver);
        let user = self.user_dirs(resolver, &base);

        ResolvedDirectories {
            platform: self.platform(),
            home,
            base,
            user,
        }
    }
}

/// Build the provider selected by `config`.
pub fn provider_for(config: &DirsConfig) -> Box<dyn DirectoryProvider> {
    match config.platform {
        Platform::Xdg => Box::new(
            XdgProvider::new()
                .with_runtime_root(config.runtime_root.clone())
                .with_user_dirs_file(config.user_dirs_file.clone()),
        ),
        Platform::MacOs => Box::new(MacOsProvider),
        Platform::Windows => Box::new(WindowsProvider::new(Box::new(NativeKnownFolders))),
        Platform::Plan9 => Box::new(Plan9Provider),
    }
}

/// Home from a single variable, else the account database, else `fallback`.
fn home_from(env: &dyn Environment, var: &str, fallback: &str) -> PathBuf {
    env.non_empty(var)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_aliases() {
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Xdg);
        assert_eq!("Darwin".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!("plan9".parse::<Platform>().unwrap(), Platform::Plan9);
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn native_platform_runs_on_host() {
        assert!(Platform::native().runs_on_host());
    }

    #[test]
    fn platform_display_matches_parse() {
        for platform in [Platform::Xdg, Platform::MacOs, Platform::Windows, Platform::Plan9] {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }
}
