//! `cafe`: interactive ordering and billing for Chill & Fill Café.

use std::process::ExitCode;

fn main() -> ExitCode {
    match cafe_cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
