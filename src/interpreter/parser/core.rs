use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_sum, statement::parse_statement, utils::expect_end_of_line},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply a single line may nest.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the sum, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := sum`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node. Tokens after the expression are left in the
/// stream.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_sum(tokens)
}

/// Tokenizes and parses one line into a [`Statement`].
///
/// # Example
/// ```
/// use numerus::{ast::Statement, interpreter::parser::core::parse_line};
///
/// let statement = parse_line("area(w, h) = w * h").unwrap();
/// assert!(matches!(statement, Statement::FunctionAssignment(_)));
///
/// assert!(parse_line("2 +").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Statement> {
    let tokens = tokenize(source)?;
    check_nesting_depth(&tokens, MAX_NESTING_DEPTH)?;
    parse_statement(&mut tokens.iter().peekable())
}

/// Tokenizes and parses a line that must consist of a single expression.
///
/// Unlike [`parse_line`], an input such as `x = 1` is rejected because the
/// `=` is left over after the expression `x`.
///
/// # Example
/// ```
/// use numerus::interpreter::parser::core::parse_expression_str;
///
/// let expr = parse_expression_str("(2 + 3) * 4").unwrap();
/// assert_eq!(expr.to_string(), "((2 + 3) * 4)");
///
/// assert!(parse_expression_str("x = 1").is_err());
/// ```
pub fn parse_expression_str(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    check_nesting_depth(&tokens, MAX_NESTING_DEPTH)?;
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;
    expect_end_of_line(&mut iter)?;
    Ok(expr)
}

/// Rejects token streams whose expression tree could grow deeper than
/// `limit`.
///
/// The parser, the evaluator and the tree itself all recurse once per level,
/// so this runs first, without recursion. Every group (the line, a pair of
/// parentheses or an argument list) is bounded by the operators directly
/// inside it plus the deepest group it contains plus one. A flat sum of `n`
/// terms therefore counts `n` and `((1))` counts 3. Unbalanced parentheses
/// are left for the parser to report.
///
/// # Errors
/// Returns [`ParseError::NestingTooDeep`] once any group exceeds `limit`.
///
/// # Example
/// ```
/// use numerus::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::check_nesting_depth},
/// };
///
/// let tokens = tokenize("(1 + 2) * 3").unwrap();
/// assert_eq!(check_nesting_depth(&tokens, 4), Ok(()));
/// assert_eq!(check_nesting_depth(&tokens, 3),
///            Err(ParseError::NestingTooDeep { limit: 3 }));
/// ```
pub fn check_nesting_depth(tokens: &[(Token, usize)], limit: usize) -> ParseResult<()> {
    // (operators, deepest nested group) for each open group
    let mut groups: Vec<(usize, usize)> = vec![(0, 0)];

    let close = |(operators, nested): (usize, usize)| -> ParseResult<usize> {
        let depth = operators.saturating_add(nested).saturating_add(1);
        if depth > limit {
            return Err(ParseError::NestingTooDeep { limit });
        }
        Ok(depth)
    };

    for (token, _) in tokens {
        match token {
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Caret | Token::Percent => {
                if let Some(group) = groups.last_mut() {
                    group.0 += 1;
                }
            },
            Token::LParen => groups.push((0, 0)),
            Token::RParen if groups.len() > 1 => {
                if let Some(group) = groups.pop() {
                    let depth = close(group)?;
                    if let Some(parent) = groups.last_mut() {
                        parent.1 = parent.1.max(depth);
                    }
                }
            },
            _ => {},
        }
    }

    while let Some(group) = groups.pop() {
        let depth = close(group)?;
        if let Some(parent) = groups.last_mut() {
            parent.1 = parent.1.max(depth);
        }
    }

    Ok(())
}
