use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items up to a closing parenthesis.
///
/// Used for function argument lists. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list. Arity is checked by
/// the caller, so the list is collected in full even when it is too long.
///
/// Grammar (simplified): `list := [item ("," item)*] ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening `(`.
/// - `parse_item`: Function used to parse each list element.
/// - `opening`: Position of the opening `(`, reported if it is never closed.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - a token other than `,` or `)` follows an item,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    opening: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                         expected: "',' or ')'",
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: opening }),
        }
    }
    Ok(items)
}
