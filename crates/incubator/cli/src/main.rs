use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    match incubator_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            ExitCode::FAILURE
        }
    }
}
