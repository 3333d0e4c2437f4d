//! Applies macOS-style rounded corners to an icon (default radius 22% of the smaller side).

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use create_app_icon::infrastructure::cli_handler::{self, RoundingArgs};

fn main() -> ExitCode {
    let args = RoundingArgs::parse();
    cli_handler::init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: RoundingArgs) -> Result<()> {
    cli_handler::run_add_rounded_corners(args)?;
    Ok(())
}
