//! Command-line host for the shift matching engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;
pub mod telemetry;

pub use error::CliError;

use rank::{RankArgs, run_rank};

const ARG_RANK_REQUEST: &str = "request-path";
const ARG_RANK_HIGH_WEIGHT: &str = "high-weight";
const ARG_RANK_NORMAL_WEIGHT: &str = "normal-weight";
const ARG_RANK_LIMIT: &str = "limit";
const ENV_RANK_REQUEST: &str = "SHIFTMATCH_CMDS_RANK_REQUEST_PATH";

/// Run the `shiftmatch` CLI with the current process arguments and
/// environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the request file or
/// the output stream fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "shiftmatch",
    about = "Score and rank worker availability against weekly shift patterns",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank workers for a pattern, or patterns for a worker.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
