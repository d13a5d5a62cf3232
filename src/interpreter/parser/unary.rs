use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_parenthesized_list, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-`. It is right-associative, so `--x` is
/// parsed as `-(-x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryMinus`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::UnaryMinus { operand: Box::new(operand) });
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | IDENTIFIER "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::Number { value: *value }),
        Some((Token::Identifier(name), _)) => parse_variable_or_call(tokens, name),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((tok, position)) => Err(unexpected(tok, *position, "an expression")),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an expression" }),
    }
}

/// Parses the rest of a parenthesized expression once `(` is consumed.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(expr)
}

/// Parses a variable reference or a function call once the identifier is
/// consumed.
///
/// An identifier immediately followed by `(` is always a call, whether or not
/// a function of that name exists yet. Whether it does is decided at
/// evaluation time.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the identifier.
/// - `name`: The identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_parenthesized_list(tokens, parse_expression)?;
            Ok(Expr::Call { name: name.to_string(),
                            arguments })
        },
        _ => Ok(Expr::Variable { name: name.to_string() }),
    }
}
