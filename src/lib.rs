//! Password generation core: character pools, uniform sampling, strength
//! scoring and the state transitions a front end drives.
//!
//! ```
//! use passgen::{GenerationConfig, assess, generate_password, random};
//!
//! let config = GenerationConfig::all().with_length(16);
//! let password = generate_password(&config, &mut random::os()).unwrap();
//! assert_eq!(password.len(), 16);
//! println!("{}", assess(password.as_str()).label);
//! ```

mod error;
pub mod pass;
pub mod random;
pub mod settings;
pub mod state;

pub use error::ValidationError;
pub use pass::{Password, StrengthAssessment, assess, generate_password};
pub use random::RandomSource;
pub use settings::GenerationConfig;
