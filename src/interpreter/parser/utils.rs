use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds an `UnexpectedToken` error for `token` found at `position`.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 position: usize,
                                                 expected: &'static str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { found: token.to_string(),
                                  expected,
                                  position }
}

/// Parses a comma-separated list of items up to the closing `)`.
///
/// The opening `(` must already be consumed. An immediately encountered `)`
/// produces an empty list. The closing `)` is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or `)`.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the line ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_parenthesized_list<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
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
            Some((tok, position)) => return Err(unexpected(tok, *position, "',' or ')'")),
            None => return Err(ParseError::UnexpectedEndOfInput { expected: "',' or ')'" }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name with its position.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the line ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok((name.clone(), *position)),
        Some((tok, position)) => Err(unexpected(tok, *position, "an identifier")),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an identifier" }),
    }
}

/// Consumes `expected` or fails, describing it as `description`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &'static str)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, position)) => Err(unexpected(tok, *position, description)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: description }),
    }
}

/// Fails if any token is left on the line.
///
/// # Errors
/// Returns `UnexpectedToken` pointing at the first leftover token.
pub(in crate::interpreter::parser) fn expect_end_of_line<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((tok, position)) => Err(unexpected(tok, *position, "end of line")),
        None => Ok(()),
    }
}
