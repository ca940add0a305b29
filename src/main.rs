//! codeassist binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match codeassist::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            codeassist::ui::output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
