//! CSS 2.2 — §10.8.1 Leading and half-leading: the `vertical-align` property
//! Spec: <https://www.w3.org/TR/CSS22/visudet.html#propdef-vertical-align>
//! Spec: <https://www.w3.org/TR/css-inline-3/#propdef-vertical-align>

use css_values_units::{
    GlobalKeyword, InvalidKeyword, Keyword as _, ParseError, keyword_enum, parse_single_keyword,
};
use cssparser::{Parser, ParserInput};
use log::trace;

keyword_enum! {
    /// Keyword values of `vertical-align`.
    ///
    /// Length and percentage values are not represented; only the closed
    /// keyword set is accepted. The CSS-wide keywords are members so that a
    /// [`GlobalKeyword`] always has a counterpart.
    pub enum VerticalAlign: "vertical-align" {
        /// Align the box's baseline with the parent's baseline.
        Baseline => "baseline",
        /// Lower the baseline to the parent's subscript position.
        Sub => "sub",
        /// Raise the baseline to the parent's superscript position.
        Super => "super",
        /// Align the top of the box with the top of the parent's content area.
        TextTop => "text-top",
        /// Align the bottom of the box with the bottom of the parent's content area.
        TextBottom => "text-bottom",
        /// Align the midpoint with the parent baseline plus half its x-height.
        Middle => "middle",
        /// Align the top of the aligned subtree with the top of the line box.
        Top => "top",
        /// Align the bottom of the aligned subtree with the bottom of the line box.
        Bottom => "bottom",
        /// Take the parent element's computed value.
        Inherit => "inherit",
        /// Reset to the initial value, `baseline`.
        Initial => "initial",
        /// Roll back to the value from the previous cascade origin.
        Revert => "revert",
        /// Roll back to the value from the previous cascade layer.
        RevertLayer => "revert-layer",
        /// Behave as `initial`; the property is not inherited.
        Unset => "unset",
    }
}

impl VerticalAlign {
    /// Initial value of the property.
    pub const INITIAL: Self = Self::Baseline;

    /// Convert a CSS-wide keyword into the matching member.
    ///
    /// # Errors
    /// Returns [`InvalidKeyword`] when the catalog has no member spelled like
    /// `global`.
    pub fn try_from_global_keyword(global: GlobalKeyword) -> Result<Self, InvalidKeyword> {
        Self::from_keyword(global.value())
    }

    /// Whether this member is one of the CSS-wide keywords.
    pub const fn is_css_wide(self) -> bool {
        matches!(
            self,
            Self::Inherit | Self::Initial | Self::Revert | Self::RevertLayer | Self::Unset
        )
    }

    /// The CSS-wide keyword this member stands for, if any.
    pub const fn as_global_keyword(self) -> Option<GlobalKeyword> {
        match self {
            Self::Inherit => Some(GlobalKeyword::Inherit),
            Self::Initial => Some(GlobalKeyword::Initial),
            Self::Revert => Some(GlobalKeyword::Revert),
            Self::RevertLayer => Some(GlobalKeyword::RevertLayer),
            Self::Unset => Some(GlobalKeyword::Unset),
            Self::Baseline
            | Self::Sub
            | Self::Super
            | Self::TextTop
            | Self::TextBottom
            | Self::Middle
            | Self::Top
            | Self::Bottom => None,
        }
    }

    /// Parse a raw declaration value such as `" Text-Top "`.
    ///
    /// # Errors
    /// See [`parse_vertical_align`].
    pub fn parse_value(text: &str) -> Result<Self, ParseError> {
        let mut input = ParserInput::new(text);
        parse_vertical_align(&mut Parser::new(&mut input))
    }

    /// Render as a declaration, e.g. `vertical-align: text-top`.
    pub fn to_declaration(self) -> String {
        format!("{}: {}", Self::PROPERTY, self.as_str())
    }
}

impl Default for VerticalAlign {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl TryFrom<GlobalKeyword> for VerticalAlign {
    type Error = InvalidKeyword;

    fn try_from(global: GlobalKeyword) -> Result<Self, Self::Error> {
        Self::try_from_global_keyword(global)
    }
}

/// Parse the value of a `vertical-align` declaration.
///
/// Exactly one identifier is accepted, matched ASCII case-insensitively.
/// Whitespace and comments around it are ignored.
///
/// # Errors
/// Returns `ParseError::EndOfInput` for an empty value,
/// `ParseError::UnexpectedToken` for non-identifier values (lengths,
/// percentages, strings), `ParseError::InvalidKeyword` for unknown
/// identifiers and `ParseError::TrailingInput` when more tokens follow.
pub fn parse_vertical_align(input: &mut Parser) -> Result<VerticalAlign, ParseError> {
    let keyword = parse_single_keyword::<VerticalAlign>(input)?;
    trace!(target: "css_inline", "parsed vertical-align: {keyword}");
    Ok(keyword)
}
