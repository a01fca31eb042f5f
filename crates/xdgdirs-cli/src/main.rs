//! CLI entry point - the composition root.
//!
//! Parses arguments, configures logging, builds the directories handle and
//! routes the command to its handler.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use xdgdirs_cli::{Cli, CliError, Commands, handlers};
use xdgdirs_core::{Directories, validate_config};

/// Log to stderr so stdout stays machine-readable.
///
/// `-v` forces debug output; otherwise `RUST_LOG` is honored with a
/// default of `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, args: &[OsString]) -> anyhow::Result<()> {
    let cli = cli.with_env_file(args)?;

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = cli.dirs_config();
    validate_config(&config).map_err(CliError::from)?;
    let dirs = Directories::with_config(&config);

    let mut out = io::stdout().lock();
    match command {
        Commands::Paths => handlers::paths::execute(&dirs, cli.json, &mut out)?,
        Commands::Create { role, name } => {
            handlers::create::execute(&dirs, (*role).into(), name, cli.json, &mut out)?;
        }
        Commands::Search { role, name } => {
            handlers::search::execute(&dirs, (*role).into(), name, cli.json, &mut out)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = Cli::parse_from(&args);
    init_logging(cli.verbose);

    match run(cli, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
