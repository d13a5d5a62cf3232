use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a line of input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// There is no leading-dot form, no exponent and no sign. A leading `-`
    /// is a separate [`Token::Minus`].
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `area_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::Percent => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Equals => write!(f, "'='"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which the token pattern
///   rules out.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts one line of text into tokens paired with their byte offsets.
///
/// Whitespace is skipped. The first character that starts no token aborts
/// the line.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedCharacter`] pointing at the offending
/// character.
///
/// # Example
/// ```
/// use numerus::{
///     error::ParseError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("x = 2.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::Equals, 2),
///                 (Token::Number(2.5), 4)]);
///
/// assert_eq!(tokenize("1 + $"),
///            Err(ParseError::UnrecognizedCharacter { found:    "$".to_string(),
///                                                    position: 4, }));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::UnrecognizedCharacter { found: lexer.slice().to_string(),
                                                               position });
            },
        }
    }

    Ok(tokens)
}
