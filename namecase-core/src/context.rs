//! Three-rune boundary context
//!
//! Every boundary decision is a pure function of a [`Window`]: what was
//! emitted before the current rune, the current rune's class, and the class
//! of the next raw rune. Keeping the rules here as a decision table makes each
//! row testable on its own, without going through the scanner.

use crate::class::RuneClass;

/// What the scanner saw before the current rune
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lookback {
    /// Nothing emitted yet
    #[default]
    Start,
    /// One or more separators consumed since the last emitted rune
    Gap,
    /// Last emitted rune was an uppercase letter
    Upper,
    /// Last emitted rune was a lowercase letter
    Lower,
    /// Last emitted rune was a digit not preceded by a lowercase letter
    Digit,
    /// Last emitted rune was a digit inside a lowercase word, as in `a2`
    DigitAfterLower,
}

impl Lookback {
    /// Lookback after emitting a rune of class `class`
    ///
    /// `Other` runes are never emitted; they move the state to [`Lookback::Gap`]
    /// unless nothing was emitted yet.
    pub fn advance(self, class: RuneClass) -> Self {
        match class {
            RuneClass::Upper => Lookback::Upper,
            RuneClass::Lower => Lookback::Lower,
            RuneClass::Digit => match self {
                Lookback::Lower | Lookback::DigitAfterLower => Lookback::DigitAfterLower,
                _ => Lookback::Digit,
            },
            RuneClass::Other => match self {
                Lookback::Start => Lookback::Start,
                _ => Lookback::Gap,
            },
        }
    }

    /// Whether a word boundary is pending regardless of the current rune
    pub fn is_pending(self) -> bool {
        matches!(self, Lookback::Start | Lookback::Gap)
    }
}

/// Window of (previous, current, next) used for one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// State left by the runes before the current one
    pub prev: Lookback,
    /// Class of the current rune
    pub current: RuneClass,
    /// Class of the next raw rune, `None` at end of input
    pub next: Option<RuneClass>,
}

impl Window {
    /// Create a window
    pub fn new(prev: Lookback, current: RuneClass, next: Option<RuneClass>) -> Self {
        Self {
            prev,
            current,
            next,
        }
    }

    /// Whether the current rune is dropped instead of emitted
    pub fn consumes(&self) -> bool {
        !self.current.is_word()
    }

    /// Whether a new word starts at the current rune
    ///
    /// | prev \ current          | lower / digit | upper                |
    /// |-------------------------|---------------|----------------------|
    /// | start, gap              | yes           | yes                  |
    /// | lower, digit after lower| no            | yes                  |
    /// | upper, digit            | no            | if next is lowercase |
    pub fn opens_word(&self) -> bool {
        if self.consumes() {
            return false;
        }
        if self.prev.is_pending() {
            return true;
        }
        match (self.prev, self.current) {
            (_, RuneClass::Lower | RuneClass::Digit | RuneClass::Other) => false,
            (Lookback::Lower | Lookback::DigitAfterLower, RuneClass::Upper) => true,
            (_, RuneClass::Upper) => self.next == Some(RuneClass::Lower),
        }
    }

    /// Whether the current rune is an uppercase letter heading a lowercase tail
    pub fn is_title(&self) -> bool {
        self.current == RuneClass::Upper && self.next == Some(RuneClass::Lower)
    }
}
