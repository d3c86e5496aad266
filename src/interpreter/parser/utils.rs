use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is used for function and method argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                         cause:    format!("expected ',' or '{closing}'"),
                                                         position: *position, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { cause: format!("expected ',' or '{closing}'") });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `cause`: Description used if something else is found.
///
/// # Returns
/// The identifier and its position.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              cause: &str)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), position)) => Ok((s.clone(), *position)),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                              cause:    cause.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { cause: cause.to_string() }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Errors
/// `UnexpectedToken` or `UnexpectedEndOfInput`, both carrying `cause`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          cause: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                              cause:    cause.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { cause: cause.to_string() }),
    }
}

/// Enters one more level of nesting.
///
/// Every construct that places a sub-expression below another one goes
/// through here, so the depth of the finished tree stays bounded and neither
/// parsing nor evaluation can exhaust the stack.
///
/// # Errors
/// `NestingTooDeep` at `position` once `depth` reaches
/// [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn descend(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                position });
    }
    Ok(depth + 1)
}
