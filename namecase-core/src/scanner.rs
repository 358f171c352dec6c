//! Boundary automaton
//!
//! [`Scanner`] walks the input once, left to right, and yields one [`Token`]
//! per rune. All decisions come from [`Window`]; the scanner only keeps the
//! lookback state and the one-rune lookahead.

use crate::class::RuneClass;
use crate::context::{Lookback, Window};
use core::iter::{FusedIterator, Peekable};
use core::str::CharIndices;

/// A rune annotated with the automaton's decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The rune itself
    pub ch: char,
    /// Byte offset of the rune in the input
    pub offset: usize,
    /// Classification of the rune
    pub class: RuneClass,
    /// A new word starts at this rune
    pub word_start: bool,
    /// The rune is a separator and is dropped from any output
    pub consumed: bool,
    /// Uppercase letter directly followed by a lowercase letter
    pub title: bool,
}

impl Token {
    /// Whether renderers copy this token to their output
    pub fn is_emitted(&self) -> bool {
        !self.consumed
    }
}

/// Lazy single-pass scanner over the runes of a string
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    lookback: Lookback,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            lookback: Lookback::Start,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (offset, ch) = self.chars.next()?;
        let next = self.chars.peek().map(|&(_, n)| RuneClass::of(n));
        let window = Window::new(self.lookback, RuneClass::of(ch), next);

        self.lookback = self.lookback.advance(window.current);

        Some(Token {
            ch,
            offset,
            class: window.current,
            word_start: window.opens_word(),
            consumed: window.consumes(),
            title: window.is_title(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `input` into boundary-annotated tokens
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Byte offsets at which words start
pub fn word_boundaries(input: &str) -> Vec<usize> {
    scan(input)
        .filter(|token| token.word_start)
        .map(|token| token.offset)
        .collect()
}

/// Iterator over the words of a string, as slices of the input
///
/// Words never contain separators, so each one is a contiguous slice.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    start: Option<usize>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for token in self.scanner.by_ref() {
            if !token.is_emitted() {
                if let Some(start) = self.start.take() {
                    return Some(&self.input[start..token.offset]);
                }
                continue;
            }
            if token.word_start {
                let previous = self.start.replace(token.offset);
                if let Some(start) = previous {
                    return Some(&self.input[start..token.offset]);
                }
            }
        }
        self.start.take().map(|start| &self.input[start..])
    }
}

impl FusedIterator for Words<'_> {}

/// Split `input` into its words
pub fn split_words(input: &str) -> Words<'_> {
    Words {
        input,
        scanner: scan(input),
        start: None,
    }
}
