//! Centralized notices and prompts for CLI output.

use std::io::Write;

use passgen::state::{Notice, NoticeKind};

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Errors always show, info notices respect quiet mode.
pub fn notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Error => error(&notice.message),
        NoticeKind::Info if !quiet::enabled() => eprintln!("{}", notice.message),
        NoticeKind::Info => {}
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to the terminal.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
