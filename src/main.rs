use std::env;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod exits;
mod logging;
mod terminal;
mod tui;

use cli::Args;

fn main() -> ExitCode {
    if cli::quiet::stdout_is_terminal() {
        terminal::reset_terminal();
    }
    exits::install_handlers();
    exits::disable_core_dumps();

    let no_args = env::args_os().len() == 1;
    let args = Args::parse();
    logging::init(args.quiet);

    cli::run(args, no_args)
}
