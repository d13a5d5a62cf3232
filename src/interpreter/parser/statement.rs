use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_end_of_line, expect_token, parse_identifier, parse_parenthesized_list},
        },
    },
};

/// Parses a single line's worth of tokens into a statement.
///
/// A statement may be one of:
/// - a variable assignment, `<identifier> = <expression>`.
/// - a function assignment, `<identifier>(<identifier>, ...) = <expression>`.
/// - an expression used as a statement.
///
/// Assignments are recognised by looking ahead from the start of the line
/// only; every other shape is parsed as one expression. The whole line must
/// be consumed. Function definitions whose body calls the function itself are
/// rejected before they are returned.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a syntax error for malformed input or leftover tokens, and
/// [`ParseError::RecursiveDefinition`] for a self-calling function.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = if let Some(statement) = parse_variable_assignment(tokens)? {
        statement
    } else if let Some(def) = parse_function_assignment(tokens)? {
        Statement::FunctionAssignment(def)
    } else {
        Statement::Expression { expr: parse_expression(tokens)? }
    };

    expect_end_of_line(tokens)?;

    if let Statement::FunctionAssignment(def) = &statement
       && def.is_directly_recursive()
    {
        return Err(ParseError::RecursiveDefinition { name: def.name.clone() });
    }

    Ok(statement)
}

/// Parses a variable assignment of the form `<identifier> = <expression>`.
///
/// The function performs a two-token lookahead. If the line does not start
/// with an identifier followed by `=`, it returns `Ok(None)` and does not
/// consume tokens.
///
/// # Returns
/// - `Ok(Some(Statement::VariableAssignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_variable_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), _)) = lookahead.next() else {
        return Ok(None);
    };
    let Some((Token::Equals, _)) = lookahead.next() else {
        return Ok(None);
    };

    *tokens = lookahead;
    let value = parse_expression(tokens)?;
    Ok(Some(Statement::VariableAssignment { name: name.clone(),
                                            value }))
}

/// Parses a function definition of the form `<name>(param1, param2, ...) =
/// <expression>`.
///
/// This function identifies a definition by checking that:
/// 1. The next token is an identifier.
/// 2. It is immediately followed by `(`.
/// 3. The parentheses hold zero or more bare identifiers separated by commas.
/// 4. The token after the closing `)` is `=`.
///
/// If the input does not match a function definition, the function returns
/// `Ok(None)` without consuming tokens, so `f(1) = 2` falls through to
/// expression parsing and fails there.
///
/// # Returns
/// - `Ok(Some(FunctionDef))` if a definition is parsed,
/// - `Ok(None)` if no definition is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a parameter name is repeated,
/// - the body expression fails to parse.
fn parse_function_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<FunctionDef>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if !is_function_head(tokens.clone()) {
        return Ok(None);
    }

    let (name, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::LParen, "'('")?;
    let declared = parse_parenthesized_list(tokens, parse_identifier)?;
    expect_token(tokens, &Token::Equals, "'='")?;

    let mut params: Vec<String> = Vec::with_capacity(declared.len());
    for (param, position) in declared {
        if params.contains(&param) {
            return Err(ParseError::DuplicateParameter { name: param,
                                                        position });
        }
        params.push(param);
    }

    let body = parse_expression(tokens)?;
    Ok(Some(FunctionDef { name, params, body }))
}

/// Checks for the token shape `IDENT "(" (IDENT ("," IDENT)*)? ")" "="`.
fn is_function_head<'a, I>(mut lookahead: I) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !matches!(lookahead.next(), Some((Token::Identifier(_), _))) {
        return false;
    }
    if !matches!(lookahead.next(), Some((Token::LParen, _))) {
        return false;
    }

    match lookahead.next() {
        Some((Token::RParen, _)) => {},
        Some((Token::Identifier(_), _)) => loop {
            match lookahead.next() {
                Some((Token::RParen, _)) => break,
                Some((Token::Comma, _)) => {
                    if !matches!(lookahead.next(), Some((Token::Identifier(_), _))) {
                        return false;
                    }
                },
                _ => return false,
            }
        },
        _ => return false,
    }

    matches!(lookahead.next(), Some((Token::Equals, _)))
}
