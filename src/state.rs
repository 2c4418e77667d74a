//! Application state and its update function.
//!
//! Front ends hold one [`AppState`] and replace it with the result of
//! [`update`] for every event. The update never performs I/O; side effects
//! come back as an [`Effect`] for the caller to run.

use tracing::{debug, info};

use crate::error::ValidationError;
use crate::pass::{self, Category, Password, StrengthAssessment};
use crate::random::RandomSource;
use crate::settings::GenerationConfig;

pub const GENERATED: &str = "Password is generated successfully";
pub const COPY_SUCCESS: &str = "Password copied to clipboard";
pub const COPY_FAIL: &str = "Nothing to copy, generate a password first";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// A password together with its assessment. Always replaced as a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: Password,
    pub assessment: StrengthAssessment,
}

impl Generated {
    fn new(password: Password) -> Self {
        let assessment = pass::assess(password.as_str());
        Self {
            password,
            assessment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Valid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub config: GenerationConfig,
    pub current: Option<Generated>,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            current: None,
            notice: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.current {
            Some(_) => Phase::Valid,
            None => Phase::Idle,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SetLength(usize),
    IncreaseLength,
    DecreaseLength,
    Toggle(Category),
    SetCategory(Category, bool),
    Regenerate,
    Copy,
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(Password),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effect: Option<Effect>,
}

impl From<AppState> for Transition {
    fn from(state: AppState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

pub fn update<R: RandomSource + ?Sized>(state: &AppState, event: Event, rng: &mut R) -> Transition {
    let config = state.config;
    match event {
        Event::SetLength(n) => reconfigure(state, config.with_length(n), rng),
        Event::IncreaseLength => reconfigure(state, config.with_length(config.length() + 1), rng),
        Event::DecreaseLength => {
            reconfigure(state, config.with_length(config.length().saturating_sub(1)), rng)
        }
        Event::Toggle(c) => reconfigure(state, config.toggled(c), rng),
        Event::SetCategory(c, on) => reconfigure(state, config.with_category(c, on), rng),
        Event::Regenerate => match pass::generate_password(&config, rng) {
            Ok(password) => AppState {
                config,
                current: Some(Generated::new(password)),
                notice: Some(Notice::info(GENERATED)),
            }
            .into(),
            Err(e) => refuse(state, e),
        },
        Event::Copy => match &state.current {
            Some(generated) => Transition {
                state: state.clone().with_notice(Notice::info(COPY_SUCCESS)),
                effect: Some(Effect::CopyToClipboard(generated.password.clone())),
            },
            None => state.clone().with_notice(Notice::error(COPY_FAIL)).into(),
        },
        Event::DismissNotice => AppState {
            notice: None,
            ..state.clone()
        }
        .into(),
    }
}

/// Apply a settings change and regenerate, or refuse and keep everything.
///
/// A length change while nothing is selected only moves the slider.
fn reconfigure<R: RandomSource + ?Sized>(
    state: &AppState,
    config: GenerationConfig,
    rng: &mut R,
) -> Transition {
    if config == state.config {
        return state.clone().into();
    }
    let length_only = config.with_length(state.config.length()) == state.config;
    if length_only && !config.has_category() {
        debug!(length = config.length(), "length changed with no category selected");
        return AppState {
            config,
            ..state.clone()
        }
        .into();
    }

    match pass::generate_password(&config, rng) {
        Ok(password) => AppState {
            config,
            current: Some(Generated::new(password)),
            notice: None,
        }
        .into(),
        Err(e) => refuse(state, e),
    }
}

fn refuse(state: &AppState, error: ValidationError) -> Transition {
    info!("generation refused: {error}");
    debug!(length = state.config.length(), "keeping previous state");
    state.clone().with_notice(Notice::error(error.to_string())).into()
}
