//! Rune classification

use core::fmt;

/// Coarse classification of a single rune for boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneClass {
    /// Uppercase letter
    Upper,
    /// Lowercase letter, or a letter without case
    Lower,
    /// Numeric rune
    Digit,
    /// Anything else; acts as a word separator and is never emitted
    Other,
}

impl RuneClass {
    /// Classify a rune
    ///
    /// Numeric runes are checked first: letter numbers such as `Ⅻ` are
    /// alphabetic too, but count as digits here.
    pub fn of(ch: char) -> Self {
        if ch.is_numeric() {
            RuneClass::Digit
        } else if ch.is_alphabetic() {
            if ch.is_uppercase() {
                RuneClass::Upper
            } else {
                RuneClass::Lower
            }
        } else {
            RuneClass::Other
        }
    }

    /// Upper or lower letter
    pub fn is_letter(self) -> bool {
        matches!(self, RuneClass::Upper | RuneClass::Lower)
    }

    /// Letter or digit, i.e. part of some word
    pub fn is_word(self) -> bool {
        self != RuneClass::Other
    }
}

impl fmt::Display for RuneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuneClass::Upper => write!(f, "upper"),
            RuneClass::Lower => write!(f, "lower"),
            RuneClass::Digit => write!(f, "digit"),
            RuneClass::Other => write!(f, "other"),
        }
    }
}
