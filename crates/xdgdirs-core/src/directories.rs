//! The reloadable directories handle and per-role file helpers.

use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, info};

use crate::config::DirsConfig;
use crate::env::{Environment, ProcessEnv};
use crate::error::DirsError;
use crate::materialize::{create_path, search_path};
use crate::platform::{DirectoryProvider, provider_for};
use crate::resolved::{ResolvedDirectories, UserDir};
use crate::runtime::prepare_runtime_dir;

/// Category of file a caller wants a path for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Data,
    Config,
    State,
    Cache,
    Runtime,
    User(UserDir),
}

impl ResolvedDirectories {
    /// Base directories for `role`, most preferred first.
    pub fn candidates(&self, role: Role) -> Vec<PathBuf> {
        match role {
            Role::Data => self.base.data_search_path(),
            Role::Config => self.base.config_search_path(),
            Role::State => vec![self.base.state_home.clone()],
            Role::Cache => vec![self.base.cache_home.clone()],
            Role::Runtime => vec![self.base.runtime_dir.clone()],
            Role::User(dir) => vec![self.user.get(dir).to_path_buf()],
        }
    }

    /// Path for writing `name` under the first usable directory of `role`,
    /// creating parent directories as needed.
    ///
    /// For [`Role::Runtime`] the runtime directory is prepared first; see
    /// [`prepare_runtime_dir`].
    pub fn create_file(&self, role: Role, name: &str) -> Result<PathBuf, DirsError> {
        if role == Role::Runtime {
            prepare_runtime_dir(&self.base.runtime_dir)?;
        }
        create_path(name, &self.candidates(role))
    }

    /// Path of an existing `name` under the directories of `role`.
    pub fn search_file(&self, role: Role, name: &str) -> Result<PathBuf, DirsError> {
        search_path(name, &self.candidates(role))
    }

    pub fn data_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.create_file(Role::Data, name)
    }

    pub fn config_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.create_file(Role::Config, name)
    }

    pub fn state_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.create_file(Role::State, name)
    }

    pub fn cache_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.create_file(Role::Cache, name)
    }

    pub fn runtime_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.create_file(Role::Runtime, name)
    }

    pub fn search_data_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.search_file(Role::Data, name)
    }

    pub fn search_config_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.search_file(Role::Config, name)
    }

    pub fn search_state_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.search_file(Role::State, name)
    }

    pub fn search_cache_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.search_file(Role::Cache, name)
    }

    pub fn search_runtime_file(&self, name: &str) -> Result<PathBuf, DirsError> {
        self.search_file(Role::Runtime, name)
    }
}

/// Owner of the current directory snapshot.
///
/// Create one at the composition root and pass it by reference. Readers
/// take an `Arc` snapshot that never changes under them; [`reload`]
/// recomputes everything and swaps the snapshot in one step.
///
/// [`reload`]: Directories::reload
pub struct Directories {
    provider: Box<dyn DirectoryProvider>,
    env: Box<dyn Environment>,
    current: ArcSwap<ResolvedDirectories>,
}

impl Directories {
    /// Resolve the host layout from the process environment.
    pub fn new() -> Self {
        Self::with_config(&DirsConfig::with_defaults())
    }

    pub fn with_config(config: &DirsConfig) -> Self {
        Self::with_provider(provider_for(config), Box::new(ProcessEnv))
    }

    /// Resolve with an explicit provider and environment.
    pub fn with_provider(provider: Box<dyn DirectoryProvider>, env: Box<dyn Environment>) -> Self {
        let resolved = provider.resolve(env.as_ref());
        debug!(platform = %resolved.platform, home = %resolved.home.display(), "directories resolved");

        Self {
            provider,
            env,
            current: ArcSwap::from_pointee(resolved),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<ResolvedDirectories> {
        self.current.load_full()
    }

    /// Re-read the environment and replace every value at once.
    pub fn reload(&self) -> Arc<ResolvedDirectories> {
        let resolved = Arc::new(self.provider.resolve(self.env.as_ref()));
        self.current.store(Arc::clone(&resolved));
        info!(platform = %resolved.platform, "directories reloaded");
        resolved
    }

    pub fn create_file(&self, role: Role, name: &str) -> Result<PathBuf, DirsError> {
        self.snapshot().create_file(role, name)
    }

    pub fn search_file(&self, role: Role, name: &str) -> Result<PathBuf, DirsError> {
        self.snapshot().search_file(role, name)
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
