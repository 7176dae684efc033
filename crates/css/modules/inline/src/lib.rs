//! CSS Inline Layout — vertical alignment of inline-level boxes.
//! Spec: <https://www.w3.org/TR/css-inline-3/>
//!
//! Only the keyword form of `vertical-align` is modelled here. Values are
//! closed enums so invalid keywords cannot be constructed; strings enter
//! through `FromStr` (exact canonical match) or [`parse_vertical_align`]
//! (CSS identifier matching).

#![forbid(unsafe_code)]

pub mod chapter_10_8_vertical_align;

pub use chapter_10_8_vertical_align::{VerticalAlign, parse_vertical_align};
pub use css_values_units::{GlobalKeyword, InvalidKeyword, Keyword, ParseError};
