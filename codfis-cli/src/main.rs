//! Codfis command-line driver.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command};
use crate::commands::{run_batch, run_check, run_encode};
use crate::logging::{LogConfig, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&LogConfig::from_cli(&cli)) {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    let mut out = io::stdout().lock();
    let outcome = match &cli.command {
        Command::Encode(args) => run_encode(args, &mut out),
        Command::Batch(args) => run_batch(args, &mut out),
        Command::Check => run_check(&mut out),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
