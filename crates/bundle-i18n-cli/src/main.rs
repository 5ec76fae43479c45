#![forbid(unsafe_code)]

mod cli;
mod command_localize;
mod command_number;
mod command_resolve;
mod config;
mod error;
mod logging;

use std::process::ExitCode;

use crate::cli::CliAppError;

fn main() -> ExitCode {
    match cli::run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliAppError::Usage(usage)) => {
            eprintln!("{usage}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
