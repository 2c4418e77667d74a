use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use passgen::pass::Category;
use passgen::settings::{MAX_LENGTH, MIN_LENGTH};
use passgen::state::Event;

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    App(Event),
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            _ => Action::Ignore,
        };
    }

    let event = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
        KeyCode::Left | KeyCode::Char('-') => Event::DecreaseLength,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Event::IncreaseLength,
        KeyCode::Home => Event::SetLength(MIN_LENGTH),
        KeyCode::End => Event::SetLength(MAX_LENGTH),
        KeyCode::Char('u') => Event::Toggle(Category::Uppercase),
        KeyCode::Char('l') => Event::Toggle(Category::Lowercase),
        KeyCode::Char('d') | KeyCode::Char('n') => Event::Toggle(Category::Digits),
        KeyCode::Char('s') => Event::Toggle(Category::Symbols),
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('r') => Event::Regenerate,
        KeyCode::Char('c') | KeyCode::Char('y') => Event::Copy,
        KeyCode::Char('x') | KeyCode::Backspace => Event::DismissNotice,
        _ => return Action::Ignore,
    };
    Action::App(event)
}

/// Key hint for a category toggle, as shown in the settings list.
pub fn toggle_key(category: Category) -> char {
    match category {
        Category::Digits => 'd',
        Category::Uppercase => 'u',
        Category::Lowercase => 'l',
        Category::Symbols => 's',
    }
}
