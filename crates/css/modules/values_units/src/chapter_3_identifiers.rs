//! CSS Identifiers (used widely across CSS values)
//! Spec: <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use crate::{Keyword, ParseError};
use cssparser::{BasicParseErrorKind, Parser, ParserInput, Token};

/// A CSS identifier value, ASCII-lowercased for canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

/// Parse a CSS identifier token, skipping leading whitespace and comments.
///
/// # Errors
/// Returns `ParseError::EndOfInput` when no token is left and
/// `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    let text = next_ident_text(input)?;
    Ok(Ident(text.to_ascii_lowercase()))
}

/// Identifier text as written in the source.
fn next_ident_text(input: &mut Parser) -> Result<String, ParseError> {
    match input.next() {
        Ok(Token::Ident(text)) => Ok(text.as_ref().to_owned()),
        Ok(_) => Err(ParseError::UnexpectedToken),
        Err(err) if matches!(err.kind, BasicParseErrorKind::EndOfInput) => {
            Err(ParseError::EndOfInput)
        }
        Err(_) => Err(ParseError::UnexpectedToken),
    }
}

/// Parse one identifier and resolve it against the keyword catalog `Catalog`.
///
/// Matching ignores ASCII case; a rejected identifier is reported with its
/// original spelling.
///
/// # Errors
/// Propagates `parse_ident` failures and returns `ParseError::InvalidKeyword`
/// when the identifier is not a member of `Catalog`.
pub fn parse_keyword<Catalog: Keyword>(input: &mut Parser) -> Result<Catalog, ParseError> {
    let text = next_ident_text(input)?;
    Ok(Catalog::from_ident(&text)?)
}

/// Parse one keyword that must make up the rest of `input`.
///
/// # Errors
/// Returns `ParseError::TrailingInput` when tokens follow the keyword, and
/// otherwise the errors of [`parse_keyword`].
pub fn parse_single_keyword<Catalog: Keyword>(input: &mut Parser) -> Result<Catalog, ParseError> {
    let keyword = parse_keyword::<Catalog>(input)?;
    input
        .expect_exhausted()
        .map_err(|_| ParseError::TrailingInput)?;
    Ok(keyword)
}

/// Parse a complete declaration value consisting of a single keyword.
///
/// Surrounding whitespace and comments are ignored; anything else after the
/// keyword is rejected.
///
/// # Errors
/// See [`parse_single_keyword`].
pub fn parse_keyword_value<Catalog: Keyword>(text: &str) -> Result<Catalog, ParseError> {
    let mut input = ParserInput::new(text);
    parse_single_keyword::<Catalog>(&mut Parser::new(&mut input))
}
