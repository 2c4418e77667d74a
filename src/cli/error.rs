use std::process::ExitCode;

use passgen::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 2 for a refused request, 1 for everything else.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Validation(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}
