//! Configuration for a [`Directories`](crate::Directories) handle.

use std::path::PathBuf;

use crate::platform::{DEFAULT_RUNTIME_ROOT, Platform};

/// How directories are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirsConfig {
    /// Layout to apply. Defaults to the host's.
    pub platform: Platform,

    /// Alternative location of the `user-dirs.dirs` file.
    /// Only read by the XDG layout.
    pub user_dirs_file: Option<PathBuf>,

    /// Parent of per-user runtime directories (XDG layout).
    pub runtime_root: PathBuf,
}

impl DirsConfig {
    /// Configuration matching the host platform.
    pub fn with_defaults() -> Self {
        Self {
            platform: Platform::native(),
            user_dirs_file: None,
            runtime_root: PathBuf::from(DEFAULT_RUNTIME_ROOT),
        }
    }

    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn user_dirs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_dirs_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn runtime_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.runtime_root = root.into();
        self
    }
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("the {0} layout cannot be resolved on this host")]
    ForeignPlatform(Platform),

    #[error("runtime root must be an absolute path, got {0}")]
    RelativeRuntimeRoot(PathBuf),

    #[error("user directories file path cannot be empty")]
    EmptyUserDirsFile,
}

/// Validate configuration values.
pub fn validate_config(config: &DirsConfig) -> Result<(), ConfigError> {
    if !config.platform.runs_on_host() {
        return Err(ConfigError::ForeignPlatform(config.platform));
    }

    if config.platform == Platform::Xdg && !config.runtime_root.is_absolute() {
        return Err(ConfigError::RelativeRuntimeRoot(config.runtime_root.clone()));
    }

    if config
        .user_dirs_file
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err(ConfigError::EmptyUserDirsFile);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        validate_config(&DirsConfig::with_defaults()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn windows_layout_is_rejected_on_posix() {
        let config = DirsConfig::with_defaults().platform(Platform::Windows);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ForeignPlatform(Platform::Windows))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn relative_runtime_root_is_rejected() {
        let config = DirsConfig::with_defaults()
            .platform(Platform::Xdg)
            .runtime_root("run/user");
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::RelativeRuntimeRoot(_))
        ));
    }

    #[test]
    fn empty_user_dirs_file_is_rejected() {
        let config = DirsConfig::with_defaults().user_dirs_file("");
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::EmptyUserDirsFile)
        ));
    }
}
