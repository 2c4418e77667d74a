use passgen::pass::Category;
use passgen::settings::{MAX_LENGTH, MIN_LENGTH};
use passgen::state::{AppState, NoticeKind};

use super::input::toggle_key;
use crate::terminal::{BOLD, DIM, Frame, GREEN, RED, RESET, color, meter};

const SLIDER_WIDTH: usize = MAX_LENGTH - MIN_LENGTH + 1;

pub fn frame(state: &AppState, source: &str) -> Frame {
    let mut frame = Frame::new();
    frame.top("Password Generator");

    match &state.current {
        Some(generated) => {
            frame.center(&format!("{BOLD}{}{RESET}", generated.password.as_str()));
            let a = generated.assessment;
            frame.line(&format!(
                "Strength: {} {}{}{RESET} {}%",
                meter(a.percent, a.color, 20),
                color(a.color),
                a.label,
                a.percent
            ));
        }
        None => {
            frame.center(&format!("{DIM}no password yet, press Enter{RESET}"));
            frame.line("Strength: -");
        }
    }

    frame.rule();
    frame.line(&format!("Password length  ◀ {:>2} ▶", state.config.length()));
    frame.line(&slider(state.config.length()));
    frame.line("");
    for category in Category::ALL {
        let mark = if state.config.includes(category) { "x" } else { " " };
        frame.line(&format!(
            "[{mark}] {:<28} {DIM}({}){RESET}",
            category.label(),
            toggle_key(category)
        ));
    }
    frame.rule();
    frame.line(&format!("{DIM}Enter generate · c copy · ←/→ length · q quit{RESET}"));
    frame.line(&format!("{DIM}Randomness: {source}{RESET}"));
    frame.bottom();

    if let Some(notice) = &state.notice {
        let tint = match notice.kind {
            NoticeKind::Info => GREEN,
            NoticeKind::Error => RED,
        };
        frame.raw(&format!(" {tint}{}{RESET}", notice.message));
    }

    frame
}

/// `8 ━━━━━━●─────── 50`
fn slider(length: usize) -> String {
    let pos = length.clamp(MIN_LENGTH, MAX_LENGTH) - MIN_LENGTH;
    format!(
        "{MIN_LENGTH} {}●{} {MAX_LENGTH}",
        "━".repeat(pos),
        "─".repeat(SLIDER_WIDTH - pos - 1)
    )
}
