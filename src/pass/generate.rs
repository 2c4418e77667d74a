//! Password generation.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{self, Pool};
use crate::error::ValidationError;
use crate::random::RandomSource;
use crate::settings::GenerationConfig;

/// A generated password. The buffer is zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Password(Zeroizing::new(s))
    }
}

/// Generate a password for `config`, refusing when no category is selected.
///
/// The random source is not touched on refusal.
pub fn generate_password<R: RandomSource + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Password, ValidationError> {
    if !config.has_category() {
        return Err(ValidationError::NoCategorySelected);
    }

    let pool = charset::build_pool(config);
    debug!(pool = pool.len(), length = config.length(), "generating password");
    Ok(generate(&pool, config.length(), rng))
}

/// Draw `length` characters from `pool`, with replacement.
///
/// An empty pool yields an empty password without drawing.
pub fn generate<R: RandomSource + ?Sized>(pool: &Pool, length: usize, rng: &mut R) -> Password {
    let chars = pool.as_chars();
    if chars.is_empty() {
        return Password::from(String::new());
    }

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(chars[pick_index(rng.next_f64(), chars.len())]);
    }
    Password::from(out)
}

/// Map a draw in `[0, 1)` to an index in `[0, len)`.
///
/// Floor, not round: rounding would reach `len` and skew toward the ends.
/// The clamp covers `draw * len` rounding up to `len` in floating point.
#[inline]
pub fn pick_index(draw: f64, len: usize) -> usize {
    let index = (draw * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Category;
    use crate::random;

    /// Replays fixed draws and counts how many were taken.
    struct Scripted {
        draws: Vec<f64>,
        calls: usize,
    }

    impl Scripted {
        fn new(draws: Vec<f64>) -> Self {
            Self { draws, calls: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let d = self.draws[self.calls % self.draws.len()];
            self.calls += 1;
            d
        }
    }

    #[test]
    fn refuses_without_touching_the_source() {
        let mut rng = Scripted::new(vec![0.5]);
        let err = generate_password(&GenerationConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, ValidationError::NoCategorySelected);
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn exact_length_from_the_pool() {
        let config = GenerationConfig::all().with_length(37);
        let pool = charset::build_pool(&config);
        let password = generate_password(&config, &mut random::os()).unwrap();
        assert_eq!(password.len(), 37);
        assert!(password.as_str().chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn one_draw_per_character() {
        let config = GenerationConfig::default()
            .with_category(Category::Digits, true)
            .with_length(10);
        let mut rng = Scripted::new(vec![0.0, 0.15, 0.99]);
        let password = generate_password(&config, &mut rng).unwrap();
        assert_eq!(rng.calls, 10);
        assert_eq!(&password.as_str()[..3], "019");
    }

    #[test]
    fn top_draw_selects_last_character() {
        let config = GenerationConfig::default().with_category(Category::Uppercase, true);
        let pool = charset::build_pool(&config);
        let mut rng = Scripted::new(vec![0.999_999_999]);
        let password = generate(&pool, 8, &mut rng);
        assert_eq!(password.as_str(), "ZZZZZZZZ");
    }

    #[test]
    fn empty_pool_yields_empty_password() {
        let pool = charset::build_pool(&GenerationConfig::default());
        let mut rng = Scripted::new(vec![0.5]);
        let password = generate(&pool, 12, &mut rng);
        assert!(password.is_empty());
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn pick_index_floors() {
        assert_eq!(pick_index(0.0, 10), 0);
        assert_eq!(pick_index(0.09, 10), 0);
        assert_eq!(pick_index(0.1, 10), 1);
        assert_eq!(pick_index(0.95, 10), 9);
        assert_eq!(pick_index(1.0 - f64::EPSILON, 10), 9);
    }

    #[test]
    fn debug_is_redacted() {
        let password = Password::from("hunter22".to_string());
        assert!(!format!("{password:?}").contains("hunter22"));
    }

    #[test]
    fn regenerating_keeps_distribution_shape() {
        let config = GenerationConfig::default()
            .with_category(Category::Lowercase, true)
            .with_category(Category::Digits, true)
            .with_length(30);
        let mut rng = random::os();
        let a = generate_password(&config, &mut rng).unwrap();
        let b = generate_password(&config, &mut rng).unwrap();
        assert_ne!(a, b);
        for p in [&a, &b] {
            assert_eq!(p.len(), 30);
            assert!(p.as_str().chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
