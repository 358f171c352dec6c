//! Renderers consuming the scanner's token stream
//!
//! Both renderers are pure consumers of [`crate::scanner::Token`]s; neither
//! classifies runes on its own.

pub mod camel;
pub mod delimited;

pub use camel::render_camel;
pub use delimited::render_delimited;

/// Output capacity for an input of `len` bytes: input size plus 25%
pub(crate) fn reserve_for(len: usize) -> usize {
    len + len / 4
}

/// Lowercase mapping restricted to one-to-one rune mappings
pub(crate) fn lower_rune(ch: char) -> char {
    single(ch.to_lowercase()).unwrap_or(ch)
}

/// Uppercase mapping restricted to one-to-one rune mappings
pub(crate) fn upper_rune(ch: char) -> char {
    single(ch.to_uppercase()).unwrap_or(ch)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        None => Some(first),
        Some(_) => None,
    }
}
