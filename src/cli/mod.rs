//! Non-interactive command line mode.

mod args;
mod context;
mod error;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use args::Args;
pub use context::Context;
pub use error::Error;

/// Run the CLI and map the outcome to an exit code.
pub fn run(args: Args, no_args: bool) -> ExitCode {
    quiet::set(args.quiet);
    match Context::new(args, no_args).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "exiting with error");
            prompts::error(&e.to_string());
            e.exit_code()
        }
    }
}
