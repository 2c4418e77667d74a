//! Interactive TUI.
//!
//! One key press is one [`Event`](passgen::state::Event): the state is
//! replaced with the update result, effects run, then the screen redraws.

mod input;
mod view;

use crossterm::event::{self, Event as TermEvent};
use passgen::RandomSource;
use passgen::random::Source;
use passgen::settings::GenerationConfig;
use passgen::state::{self, AppState, Effect, Notice, Transition};
use tracing::debug;

use crate::cli::Error;
use crate::clipboard::Clipboard;
use crate::terminal::RawModeGuard;

use input::{Action, map_key};

/// Run TUI interactive mode until the user quits.
pub fn run(config: GenerationConfig, mut rng: Source) -> Result<(), Error> {
    let mut clipboard = Clipboard::lazy();
    let mut state = AppState::new(config);
    if config.has_category() {
        state = state::update(&state, state::Event::Regenerate, &mut rng).state;
        state.notice = None;
    }

    let _guard = RawModeGuard::new()?;
    let mut stdout = std::io::stdout();

    loop {
        view::frame(&state, rng.name()).render(&mut stdout)?;

        let key = match event::read()? {
            TermEvent::Key(key) => key,
            _ => continue,
        };

        match map_key(key) {
            Action::Quit => break,
            Action::Ignore => {}
            Action::App(event) => {
                debug!(?event, "tui event");
                let transition = state::update(&state, event, &mut rng);
                state = run_effect(transition, &mut clipboard);
            }
        }
    }

    Ok(())
}

/// Perform the transition's side effect and fold any failure into a notice.
fn run_effect(transition: Transition, clipboard: &mut Clipboard) -> AppState {
    let Transition { state, effect } = transition;
    match effect {
        Some(Effect::CopyToClipboard(password)) => match clipboard.copy(password.as_str()) {
            Ok(()) => state,
            Err(e) => {
                debug!("clipboard write failed: {e}");
                state.with_notice(Notice::error(e.to_string()))
            }
        },
        None => state,
    }
}
