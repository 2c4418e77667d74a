//! Password generation settings.

use crate::pass::Category;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 26;

/// Length and category selection for one generation request.
///
/// Rebuilt on every interaction. Length is always kept inside
/// `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    /// All four categories enabled.
    pub fn all() -> Self {
        Self {
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
            ..Default::default()
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }

    pub fn with_category(mut self, category: Category, enabled: bool) -> Self {
        *self.flag_mut(category) = enabled;
        self
    }

    pub fn toggled(self, category: Category) -> Self {
        let enabled = self.includes(category);
        self.with_category(category, !enabled)
    }

    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Digits => self.include_digits,
            Category::Uppercase => self.include_upper,
            Category::Lowercase => self.include_lower,
            Category::Symbols => self.include_symbols,
        }
    }

    pub fn has_category(&self) -> bool {
        Category::ALL.into_iter().any(|c| self.includes(c))
    }

    fn flag_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Digits => &mut self.include_digits,
            Category::Uppercase => &mut self.include_upper,
            Category::Lowercase => &mut self.include_lower,
            Category::Symbols => &mut self.include_symbols,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_clamped() {
        assert_eq!(GenerationConfig::default().with_length(3).length(), MIN_LENGTH);
        assert_eq!(GenerationConfig::default().with_length(500).length(), MAX_LENGTH);
        assert_eq!(GenerationConfig::default().with_length(12).length(), 12);
    }

    #[test]
    fn default_selects_nothing() {
        let config = GenerationConfig::default();
        assert_eq!(config.length(), DEFAULT_LENGTH);
        assert!(!config.has_category());
    }

    #[test]
    fn toggle_flips_one_category() {
        let config = GenerationConfig::default().toggled(Category::Symbols);
        assert!(config.include_symbols);
        assert!(!config.include_digits);
        assert!(!config.toggled(Category::Symbols).has_category());
    }
}
