//! CSS Values and Units Module — keyword value spaces shared by property crates.
//! Spec: <https://www.w3.org/TR/css-values-4/>

#![forbid(unsafe_code)]

use core::error::Error;
use core::fmt;

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_3_identifiers;
pub mod chapter_3_keywords;
pub mod chapter_7_css_wide_keywords;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{
    Ident, parse_ident, parse_keyword, parse_keyword_value, parse_single_keyword,
};
#[doc(hidden)]
pub use chapter_3_keywords::__private;
pub use chapter_3_keywords::{InvalidKeyword, Keyword};
pub use chapter_7_css_wide_keywords::GlobalKeyword;

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// The value ended before a token was found.
    EndOfInput,
    /// Tokens remained after a complete value was parsed.
    TrailingInput,
    /// An identifier was parsed but is not a member of the keyword catalog.
    InvalidKeyword(InvalidKeyword),
}

impl From<InvalidKeyword> for ParseError {
    fn from(err: InvalidKeyword) -> Self {
        Self::InvalidKeyword(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::EndOfInput => formatter.write_str("unexpected end of input"),
            Self::TrailingInput => formatter.write_str("unexpected input after value"),
            Self::InvalidKeyword(err) => write!(formatter, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKeyword(err) => Some(err),
            Self::UnexpectedToken | Self::EndOfInput | Self::TrailingInput => None,
        }
    }
}
