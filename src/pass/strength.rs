//! Heuristic strength scoring.
//!
//! Five independent checks, each worth one point: longer than 8, longer
//! than 12, has an uppercase letter, has a digit, has something outside
//! `[A-Za-z0-9]`. The total maps onto a fixed band. This is not an entropy
//! estimate and the banding must stay exactly as is.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    None,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::None => "None",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "VeryStrong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display token for the strength meter; the front end picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    None,
    Red,
    Orange,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthAssessment {
    pub label: StrengthLabel,
    pub percent: u8,
    pub color: ColorHint,
}

impl StrengthAssessment {
    pub const NONE: StrengthAssessment = StrengthAssessment {
        label: StrengthLabel::None,
        percent: 0,
        color: ColorHint::None,
    };
}

/// Number of satisfied checks, 0 to 5.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let checks = [
        length > 8,
        length > 12,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().filter(|&hit| hit).count() as u8
}

pub fn assess(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment::NONE;
    }

    let (label, percent, color) = match score(password) {
        0..=2 => (StrengthLabel::Weak, 25, ColorHint::Red),
        3 => (StrengthLabel::Medium, 50, ColorHint::Orange),
        4 => (StrengthLabel::Strong, 75, ColorHint::Yellow),
        _ => (StrengthLabel::VeryStrong, 100, ColorHint::Green),
    };

    StrengthAssessment {
        label,
        percent,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_none() {
        assert_eq!(assess(""), StrengthAssessment::NONE);
        assert_eq!(assess("").percent, 0);
    }

    #[test]
    fn lowercase_nine_is_weak() {
        let a = assess("abcdefghi");
        assert_eq!(score("abcdefghi"), 1);
        assert_eq!(a.label, StrengthLabel::Weak);
        assert_eq!(a.percent, 25);
    }

    #[test]
    fn everything_is_very_strong() {
        let a = assess("Abcdefghijkl3!");
        assert_eq!(score("Abcdefghijkl3!"), 5);
        assert_eq!(a.label, StrengthLabel::VeryStrong);
        assert_eq!(a.percent, 100);
        assert_eq!(a.color, ColorHint::Green);
    }

    #[test]
    fn bands() {
        // length > 8, upper, digit
        assert_eq!(assess("Abcdefgh1").label, StrengthLabel::Medium);
        assert_eq!(assess("Abcdefgh1").percent, 50);
        // length > 8, length > 12, upper, digit
        assert_eq!(assess("Abcdefghijkl1").label, StrengthLabel::Strong);
        assert_eq!(assess("Abcdefghijkl1").percent, 75);
        // exactly 8 and 12 do not count
        assert_eq!(score("abcdefgh"), 0);
        assert_eq!(score("abcdefghijkl"), 1);
        // short but mixed
        assert_eq!(score("A1!"), 3);
    }

    #[test]
    fn lowercase_is_not_a_check() {
        assert_eq!(score("ABCDEFGH"), score("ABCDEFGh"));
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(score("é"), 1);
    }

    #[test]
    fn idempotent() {
        let p = "Tr0ub4dor&3";
        assert_eq!(assess(p), assess(p));
    }

    #[test]
    fn serializes_with_lowercase_color() {
        let json = serde_json::to_string(&assess("Abcdefghijkl3!")).unwrap();
        assert_eq!(json, r#"{"label":"VeryStrong","percent":100,"color":"green"}"#);
    }
}
