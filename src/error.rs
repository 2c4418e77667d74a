use thiserror::Error;

/// Refusal to generate, detected before any random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("To generate a password you must select at least one category")]
    NoCategorySelected,
}
