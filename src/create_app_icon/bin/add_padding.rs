//! Pads an icon with a transparent border (default 15% of the larger side).

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use create_app_icon::infrastructure::cli_handler::{self, PaddingArgs};

fn main() -> ExitCode {
    let args = PaddingArgs::parse();
    cli_handler::init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: PaddingArgs) -> Result<()> {
    cli_handler::run_add_padding(args)?;
    Ok(())
}
