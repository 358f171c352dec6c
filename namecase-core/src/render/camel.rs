//! Medial-capitals rendering: `camelCase` and `PascalCase`

use super::{lower_rune, upper_rune};
use crate::scanner::Token;

/// Position of the renderer relative to the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AtWordStart,
    InWord,
}

/// Join the words of a token stream by capitalization alone
///
/// The first emitted rune is forced to uppercase when `first_upper` is set,
/// to lowercase otherwise. Every later word start is forced to uppercase.
/// Digits and all other runes keep their case, which keeps abbreviations such
/// as `HTTP` intact.
pub fn render_camel<I>(tokens: I, first_upper: bool, capacity: usize) -> String
where
    I: IntoIterator<Item = Token>,
{
    let mut out = String::with_capacity(capacity);
    let mut state = State::AtWordStart;

    for token in tokens {
        if !token.is_emitted() {
            continue;
        }
        if token.word_start {
            state = State::AtWordStart;
        }

        let ch = match state {
            State::AtWordStart if !token.class.is_letter() => token.ch,
            State::AtWordStart if out.is_empty() => {
                if first_upper {
                    upper_rune(token.ch)
                } else {
                    lower_rune(token.ch)
                }
            }
            State::AtWordStart => upper_rune(token.ch),
            State::InWord => token.ch,
        };
        out.push(ch);
        state = State::InWord;
    }

    out
}
