//! Delimited rendering: `snake_case`, `kebab-case`, `dot.separated`, ...

use super::lower_rune;
use crate::scanner::Token;

/// Join the words of a token stream with `sep`
///
/// A separator goes in front of every word start except the first emitted
/// rune, so the output never starts or ends with `sep` and never repeats it.
/// Letters keep their case, except uppercase letters heading a lowercase
/// tail (`Body` in `rawHTTPBody`), which are lowercased.
pub fn render_delimited<I>(tokens: I, sep: char, capacity: usize) -> String
where
    I: IntoIterator<Item = Token>,
{
    let mut out = String::with_capacity(capacity);

    for token in tokens {
        if !token.is_emitted() {
            continue;
        }
        if token.word_start && !out.is_empty() {
            out.push(sep);
        }
        if token.title {
            out.push(lower_rune(token.ch));
        } else {
            out.push(token.ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn delimit(input: &str, sep: char) -> String {
        render_delimited(scan(input), sep, input.len())
    }

    #[test]
    fn test_camel_input() {
        assert_eq!(delimit("loFi", '_'), "lo_fi");
        assert_eq!(delimit("rawHTTPBody", '.'), "raw.HTTP.body");
    }

    #[test]
    fn test_no_edge_separators() {
        assert_eq!(delimit("__init__", '_'), "init");
        assert_eq!(delimit("  spaced  out  ", '-'), "spaced-out");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(delimit("", '_'), "");
        assert_eq!(delimit("---", '_'), "");
        assert_eq!(delimit("!?", '.'), "");
    }

    #[test]
    fn test_separator_replaced() {
        assert_eq!(delimit("a-b_c.d e", '_'), "a_b_c_d_e");
    }

    #[test]
    fn test_multibyte_separator() {
        assert_eq!(delimit("fooBar", '→'), "foo→bar");
    }
}
