//! Password generation and scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{Category, Pool, build_pool};
pub use generate::{Password, generate, generate_password, pick_index};
pub use strength::{ColorHint, StrengthAssessment, StrengthLabel, assess};
