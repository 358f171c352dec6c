//! Word boundary detection and naming convention conversion
//!
//! Converts identifier-like text between delimited forms (`snake_case`,
//! `kebab-case`, `dot.separated`) and medial-capitals forms (`camelCase`,
//! `PascalCase`). The input may use any convention, or none at all.
//!
//! # Architecture
//!
//! Data flows one way:
//! - **Classifier** ([`class`]): upper, lower, digit or other, per rune
//! - **Boundary automaton** ([`scanner`], [`context`]): a single pass over the
//!   runes that marks where words start, using the previous emitted rune and
//!   one rune of lookahead
//! - **Renderers** ([`render`]): delimited or camel output built from the
//!   automaton's tokens
//!
//! Upper case abbreviations are preserved: a run of capitals is only split
//! before its last letter, and only when that letter starts a lowercase word.
//!
//! # Example
//!
//! ```rust
//! use namecase_core::{to_camel_case, to_delimited, to_snake_case};
//!
//! assert_eq!(to_snake_case("rawHTTPBody"), "raw_HTTP_body");
//! assert_eq!(to_snake_case("Anything goes!"), "anything_goes");
//! assert_eq!(to_camel_case("raw_HTTP_body", true), "RawHTTPBody");
//! assert_eq!(
//!     to_delimited("*All Hype is aGoodThing (TM)", '-'),
//!     "all-hype-is-a-good-thing-TM"
//! );
//! ```

pub mod class;
pub mod context;
pub mod error;
pub mod render;
pub mod scanner;
pub mod style;

pub use class::RuneClass;
pub use error::{CoreError, Result};
pub use scanner::{scan, split_words, word_boundaries, Scanner, Token, Words};
pub use style::{CaseStyle, Separator};

use render::{render_camel, render_delimited, reserve_for};

/// Join the words of `input` with `separator`
///
/// Leading, trailing and repeated separators are dropped, as is every other
/// rune that is neither a letter nor a digit. Letters keep their case except
/// the capital heading a lowercase word (`HiFi` gives `hi_fi`).
///
/// `separator` should not be a letter or digit; with one, converting the
/// output again is no longer stable. Use [`Separator::new`] to check a
/// separator from untrusted input.
pub fn to_delimited(input: &str, separator: char) -> String {
    render_delimited(scan(input), separator, reserve_for(input.len()))
}

/// `snake_case` form of `input`
pub fn to_snake_case(input: &str) -> String {
    to_delimited(input, '_')
}

/// `kebab-case` form of `input`
pub fn to_kebab_case(input: &str) -> String {
    to_delimited(input, '-')
}

/// `dot.separated` form of `input`
pub fn to_dotted(input: &str) -> String {
    to_delimited(input, '.')
}

/// Medial-capitals form of `input`
///
/// `capitalize_first` gives `PascalCase`, otherwise `camelCase`. Every word
/// after the first starts with a capital; other letters keep their case.
pub fn to_camel_case(input: &str, capitalize_first: bool) -> String {
    render_camel(scan(input), capitalize_first, reserve_for(input.len()))
}

/// `PascalCase` form of `input`
pub fn to_pascal_case(input: &str) -> String {
    to_camel_case(input, true)
}

/// `camelCase` form of `input` with a lowercase first letter
pub fn to_dromedary_case(input: &str) -> String {
    to_camel_case(input, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrappers_agree_with_to_delimited() {
        let input = "someHTTPThing 2Go";
        assert_eq!(to_snake_case(input), to_delimited(input, '_'));
        assert_eq!(to_kebab_case(input), to_delimited(input, '-'));
        assert_eq!(to_dotted(input), to_delimited(input, '.'));
        assert_eq!(to_pascal_case(input), to_camel_case(input, true));
        assert_eq!(to_dromedary_case(input), to_camel_case(input, false));
    }

    #[test]
    fn test_module_exports() {
        let _class: RuneClass = RuneClass::of('a');
        let _style: CaseStyle = CaseStyle::default();
        let _tokens: Vec<Token> = scan("a").collect();
        let _err: CoreError = CoreError::AlphanumericSeparator('a');
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scanner<'static>>();
        assert_send_sync::<CaseStyle>();
        assert_send_sync::<CoreError>();
    }
}
