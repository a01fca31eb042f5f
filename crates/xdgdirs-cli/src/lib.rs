//! Command-line front end for `xdgdirs-core`.
//!
//! The binary in `main.rs` is the composition root: it parses arguments,
//! sets up logging, builds a [`Directories`](xdgdirs_core::Directories)
//! handle and dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs only
use tracing_subscriber as _;

pub mod error;
pub mod handlers;
pub mod parser;

pub use error::CliError;
pub use parser::{Cli, Commands, RoleArg};
