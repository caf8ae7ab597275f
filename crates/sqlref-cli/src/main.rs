//! Entry point for the `sqlref` binary.

use std::process::ExitCode;

use sqlref_cli::error::exit_code_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match sqlref_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
