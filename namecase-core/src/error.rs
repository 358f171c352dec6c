//! Error types for validating constructors
//!
//! Conversions themselves are total and never fail; these errors only come
//! from checking caller-supplied separators and style names.

use thiserror::Error;

/// Core validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Separator would be read back as part of a word
    #[error("separator {0:?} is a letter or digit")]
    AlphanumericSeparator(char),

    /// Style name not recognised
    #[error("unknown case style: {0}")]
    UnknownStyle(String),

    /// Separator text is not exactly one rune
    #[error("separator must be a single character, got {0:?}")]
    SeparatorLength(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
