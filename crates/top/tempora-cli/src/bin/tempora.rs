use std::process::ExitCode;

use clap::Parser as _;

fn main() -> ExitCode {
    tempora_log::setup_logging();

    let args = tempora_cli::Args::parse();
    match args.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
