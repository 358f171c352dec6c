//! Named case styles and validated separators

use crate::error::{CoreError, Result};
use core::fmt;
use core::str::FromStr;

/// A word separator that is guaranteed not to be a letter or digit
///
/// Letters and digits would be read back as word content, so re-delimiting
/// the output would no longer be stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Separator(char);

impl Separator {
    /// Underscore, as in `snake_case`
    pub const UNDERSCORE: Separator = Separator('_');
    /// Hyphen, as in `kebab-case`
    pub const HYPHEN: Separator = Separator('-');
    /// Full stop, as in `dot.separated`
    pub const DOT: Separator = Separator('.');

    /// Validate a separator rune
    pub fn new(ch: char) -> Result<Self> {
        if ch.is_alphanumeric() {
            return Err(CoreError::AlphanumericSeparator(ch));
        }
        Ok(Self(ch))
    }

    /// The separator rune
    pub fn as_char(self) -> char {
        self.0
    }
}

impl FromStr for Separator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Separator::new(ch),
            _ => Err(CoreError::SeparatorLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(sep: Separator) -> Self {
        sep.0.to_string()
    }
}

impl From<Separator> for char {
    fn from(sep: Separator) -> Self {
        sep.0
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum CaseStyle {
    /// `snake_case`
    #[default]
    Snake,
    /// `kebab-case`
    Kebab,
    /// `dot.separated`
    Dotted,
    /// `camelCase`, lowercase first letter
    Camel,
    /// `PascalCase`, uppercase first letter
    Pascal,
    /// Words joined by an arbitrary separator
    Delimited(Separator),
}

impl CaseStyle {
    /// Styles that have a name of their own
    pub const ALL_NAMED: [CaseStyle; 5] = [
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::Dotted,
        CaseStyle::Camel,
        CaseStyle::Pascal,
    ];

    /// Convert `input` to this style
    pub fn apply(&self, input: &str) -> String {
        match self.separator() {
            Some(sep) => crate::to_delimited(input, sep.as_char()),
            None => crate::to_camel_case(input, *self == CaseStyle::Pascal),
        }
    }

    /// The separator for delimited styles, `None` for camel styles
    pub fn separator(&self) -> Option<Separator> {
        match self {
            CaseStyle::Snake => Some(Separator::UNDERSCORE),
            CaseStyle::Kebab => Some(Separator::HYPHEN),
            CaseStyle::Dotted => Some(Separator::DOT),
            CaseStyle::Delimited(sep) => Some(*sep),
            CaseStyle::Camel | CaseStyle::Pascal => None,
        }
    }

    /// One-line description with an example
    pub fn description(&self) -> &'static str {
        match self {
            CaseStyle::Snake => "words joined by underscores (raw_HTTP_body)",
            CaseStyle::Kebab => "words joined by hyphens (raw-HTTP-body)",
            CaseStyle::Dotted => "words joined by dots (raw.HTTP.body)",
            CaseStyle::Camel => "medial capitals, lowercase first (rawHTTPBody)",
            CaseStyle::Pascal => "medial capitals, uppercase first (RawHTTPBody)",
            CaseStyle::Delimited(_) => "words joined by a custom separator",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = CoreError;

    /// Parse a style name
    ///
    /// Names are case-insensitive; `delimited:<rune>` selects a custom
    /// separator.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(sep) = s.strip_prefix("delimited:") {
            return Ok(CaseStyle::Delimited(sep.parse()?));
        }
        match s.to_lowercase().as_str() {
            "snake" | "snake_case" => Ok(CaseStyle::Snake),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dotted" | "dot" | "dot.case" => Ok(CaseStyle::Dotted),
            "camel" | "camelcase" | "dromedary" => Ok(CaseStyle::Camel),
            "pascal" | "pascalcase" => Ok(CaseStyle::Pascal),
            _ => Err(CoreError::UnknownStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for CaseStyle {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CaseStyle> for String {
    fn from(style: CaseStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Snake => write!(f, "snake"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dotted => write!(f, "dotted"),
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Pascal => write!(f, "pascal"),
            CaseStyle::Delimited(sep) => write!(f, "delimited:{sep}"),
        }
    }
}
