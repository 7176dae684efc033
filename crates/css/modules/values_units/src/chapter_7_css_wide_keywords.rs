//! CSS Values & Units Level 4 — §7.3 CSS-wide Keywords
//! Spec: <https://www.w3.org/TR/css-values-4/#common-keywords>

use crate::Keyword;

crate::keyword_enum! {
    /// Keywords accepted by every CSS property.
    ///
    /// Property catalogs that list these members accept a `GlobalKeyword`
    /// through an explicit, fallible conversion.
    pub enum GlobalKeyword: "css-wide" {
        /// The property's initial value.
        Initial => "initial",
        /// The parent element's computed value.
        Inherit => "inherit",
        /// `inherit` for inherited properties, `initial` otherwise.
        Unset => "unset",
        /// Roll back to the previous cascade origin.
        Revert => "revert",
        /// Roll back to the previous cascade layer.
        RevertLayer => "revert-layer",
    }
}

impl GlobalKeyword {
    /// The underlying canonical string.
    #[inline]
    pub fn value(self) -> &'static str {
        Keyword::as_str(self)
    }
}
