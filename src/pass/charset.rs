//! Character categories and pool building.

use std::fmt;

use crate::settings::GenerationConfig;

pub const DIGITS: &str = "0123456789";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "!'^+%&/()=?_#${[]}|;:>~<.*-@";

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Digits,
    Uppercase,
    Lowercase,
    Symbols,
}

impl Category {
    /// Pool order: digits, uppercase, lowercase, symbols.
    pub const ALL: [Category; 4] = [
        Category::Digits,
        Category::Uppercase,
        Category::Lowercase,
        Category::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            Category::Digits => DIGITS,
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Digits => "Include Numbers",
            Category::Uppercase => "Add Uppercase Letters",
            Category::Lowercase => "Add Lowercase Letters",
            Category::Symbols => "Include Symbols",
        }
    }
}

/// Concatenated characters of every enabled category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool(Vec<char>);

impl Pool {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the character pool from the enabled categories.
///
/// Never fails; an empty pool means nothing is selected and it is up to the
/// caller to refuse generation.
pub fn build_pool(config: &GenerationConfig) -> Pool {
    let mut chars = Vec::with_capacity(size(config));

    for category in Category::ALL {
        if config.includes(category) {
            chars.extend(category.chars().chars());
        }
    }

    Pool(chars)
}

/// Pool size without building it.
pub fn size(config: &GenerationConfig) -> usize {
    Category::ALL
        .into_iter()
        .filter(|c| config.includes(*c))
        .map(|c| c.chars().len())
        .sum()
}
