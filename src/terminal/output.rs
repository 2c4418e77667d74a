//! Terminal output utilities.
//!
//! Box drawing into a frame buffer, the strength meter, ANSI helpers.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;
use passgen::pass::ColorHint;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

pub fn color(hint: ColorHint) -> &'static str {
    match hint {
        ColorHint::None => "",
        ColorHint::Red => RED,
        ColorHint::Orange => ORANGE,
        ColorHint::Yellow => YELLOW,
        ColorHint::Green => GREEN,
    }
}

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (62 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 62;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Lines of a boxed screen, written in one go with `\r\n` endings so it
/// renders correctly in raw mode.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        if title.is_empty() {
            self.lines.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.lines
                .push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
        self
    }

    /// │ content                           │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// │          content                  │
    pub fn center(&mut self, content: &str) -> &mut Self {
        let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// ├───────────────────────────────────┤
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// └───────────────────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Unboxed line below the frame.
    pub fn raw(&mut self, content: &str) -> &mut Self {
        self.lines.push(content.to_string());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Clear the screen and draw the frame from the top-left corner.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"\x1b[2J\x1b[H")?;
        for line in self.lines() {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// `████████░░░░░░░░` filled to `percent`, colored by `hint`.
pub fn meter(percent: u8, hint: ColorHint, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    format!(
        "{}{}{}{DIM}{}{RESET}",
        color(hint),
        "█".repeat(filled),
        RESET,
        "░".repeat(width - filled)
    )
}
