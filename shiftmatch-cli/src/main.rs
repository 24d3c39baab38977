//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use shiftmatch_cli::CliError;

fn main() {
    let outcome = shiftmatch_cli::telemetry::init().and_then(|()| shiftmatch_cli::run());
    match outcome {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("shiftmatch: {err}");
            std::process::exit(1);
        }
    }
}
