//! Main CLI parser and top-level argument handling.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use xdgdirs_core::{DirsConfig, Platform, Role, UserDir};

/// Command-line interface for inspecting and materializing
/// per-user directories.
#[derive(Parser, Debug)]
#[command(name = "xdgdirs")]
#[command(about = "Resolve XDG base and user directories")]
#[command(version)]
pub struct Cli {
    /// Layout to resolve (xdg, macos, windows, plan9); defaults to the host's
    #[arg(long, global = true, env = "XDGDIRS_PLATFORM")]
    pub platform: Option<Platform>,

    /// Read an alternative user-dirs.dirs file (XDG layout)
    #[arg(long = "user-dirs-file", global = true)]
    pub user_dirs_file: Option<PathBuf>,

    /// Parent of per-user runtime directories (XDG layout)
    #[arg(long = "runtime-root", global = true)]
    pub runtime_root: Option<PathBuf>,

    /// Load variables from a dotenv file before resolving
    #[arg(long = "env-file", global = true)]
    pub env_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Load `--env-file`, if given, and parse `args` again so options
    /// bound to environment variables see the file's values.
    pub fn with_env_file<T>(self, args: &[T]) -> anyhow::Result<Self>
    where
        T: Into<OsString> + Clone,
    {
        let Some(path) = &self.env_file else {
            return Ok(self);
        };

        dotenvy::from_path(path)
            .with_context(|| format!("failed to load environment from {}", path.display()))?;
        Ok(Self::try_parse_from(args.iter().cloned())?)
    }

    /// Directory configuration described by the global options.
    pub fn dirs_config(&self) -> DirsConfig {
        let mut config = DirsConfig::with_defaults();
        if let Some(platform) = self.platform {
            config = config.platform(platform);
        }
        if let Some(path) = &self.user_dirs_file {
            config = config.user_dirs_file(path.clone());
        }
        if let Some(root) = &self.runtime_root {
            config = config.runtime_root(root.clone());
        }
        config
    }
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show every resolved directory
    Paths,

    /// Print the path a file should be written to, creating parent directories
    Create {
        /// Kind of directory to place the file under
        role: RoleArg,
        /// Relative file name, e.g. "appname/config.toml"
        name: String,
    },

    /// Print the path of an existing file
    Search {
        /// Kind of directory to look under
        role: RoleArg,
        /// Relative file name, e.g. "appname/config.toml"
        name: String,
    },
}

/// Directory role as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    Data,
    Config,
    State,
    Cache,
    Runtime,
    Desktop,
    Download,
    Documents,
    Music,
    Pictures,
    Videos,
    Templates,
    PublicShare,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Data => Self::Data,
            RoleArg::Config => Self::Config,
            RoleArg::State => Self::State,
            RoleArg::Cache => Self::Cache,
            RoleArg::Runtime => Self::Runtime,
            RoleArg::Desktop => Self::User(UserDir::Desktop),
            RoleArg::Download => Self::User(UserDir::Download),
            RoleArg::Documents => Self::User(UserDir::Documents),
            RoleArg::Music => Self::User(UserDir::Music),
            RoleArg::Pictures => Self::User(UserDir::Pictures),
            RoleArg::Videos => Self::User(UserDir::Videos),
            RoleArg::Templates => Self::User(UserDir::Templates),
            RoleArg::PublicShare => Self::User(UserDir::PublicShare),
        }
    }
}
