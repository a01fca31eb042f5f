//! Resolution of XDG base directories and well-known user directories,
//! with platform-native fallbacks for macOS, Windows and Plan 9.
//!
//! ```no_run
//! use xdgdirs_core::Directories;
//!
//! let dirs = Directories::new();
//! let config = dirs.snapshot().config_file("appname/config.toml")?;
//! println!("writing config to {}", config.display());
//! # Ok::<(), xdgdirs_core::DirsError>(())
//! ```
//!
//! # Design
//!
//! - Resolution never fails; every value has a fallback ending at the
//!   filesystem root or a fixed system path
//! - Only materializing a path (create/search) returns errors
//! - OS-specific layouts live behind [`DirectoryProvider`]

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod directories;
pub mod env;
pub mod error;
pub mod materialize;
pub mod pathutil;
pub mod platform;
pub mod resolved;
pub mod runtime;
pub mod userdirs;

// Re-export public API
pub use config::{ConfigError, DirsConfig, validate_config};
pub use directories::{Directories, Role};
pub use env::{EnvResolver, Environment, MapEnv, ProcessEnv};
pub use error::DirsError;
pub use materialize::{create_path, search_path};
pub use pathutil::{expand_home, path_exists, unique_paths};
pub use platform::{
    DirectoryProvider, KnownFolder, KnownFolderProbe, MacOsProvider, NativeKnownFolders,
    NoKnownFolders, ParsePlatformError, Plan9Provider, Platform, WindowsProvider, XdgProvider,
    provider_for,
};
pub use resolved::{BaseDirectories, ResolvedDirectories, UserDir, UserDirectories};
pub use runtime::prepare_runtime_dir;
pub use userdirs::{USER_DIRS_FILE, UserDirsConfig, parse_config, parse_config_file};

// Only used by the integration tests
#[cfg(test)]
use serde_json as _;
