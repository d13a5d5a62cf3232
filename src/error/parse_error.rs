/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the line being parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer found a character that starts no token.
    #[error("Unrecognized character '{found}' at position {position}.")]
    UnrecognizedCharacter {
        /// The offending text.
        found:    String,
        /// Where the character starts.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Expected {expected} at position {position}, found {found}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the grammar allows at this point.
        expected: &'static str,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of the line while a construct was still open.
    #[error("Expected {expected}, found end of line.")]
    UnexpectedEndOfInput {
        /// What the grammar allows at this point.
        expected: &'static str,
    },
    /// A function definition lists the same parameter twice.
    #[error("Parameter '{name}' is declared more than once at position {position}.")]
    DuplicateParameter {
        /// The repeated parameter name.
        name:     String,
        /// Where the repetition starts.
        position: usize,
    },
    /// The line is not valid UTF-8.
    #[error("Invalid UTF-8 at position {position}.")]
    InvalidUtf8 {
        /// Where the first invalid byte starts.
        position: usize,
    },
    /// The expression on the line is too long or nested too deeply to be
    /// processed.
    #[error("Expression is nested deeper than the limit of {limit} levels.")]
    NestingTooDeep {
        /// The limit that was hit.
        limit: usize,
    },
    /// A function definition calls the function it defines.
    #[error("Function '{name}' calls itself. Recursive functions are not available.")]
    RecursiveDefinition {
        /// The name of the function.
        name: String,
    },
}

impl ParseError {
    /// Returns the byte position the error points at, if it has one.
    ///
    /// End-of-input errors point past the end of the line. Nesting and
    /// definition-level errors describe the whole line. All of these return
    /// `None`.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::InvalidUtf8 { position }
            | Self::UnexpectedToken { position, .. }
            | Self::DuplicateParameter { position, .. } => Some(*position),
            Self::UnexpectedEndOfInput { .. }
            | Self::NestingTooDeep { .. }
            | Self::RecursiveDefinition { .. } => None,
        }
    }

    /// Whether this is a syntax error, as opposed to a lexing error or a
    /// rejected recursive definition.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self,
                 Self::UnexpectedToken { .. }
                 | Self::UnexpectedEndOfInput { .. }
                 | Self::DuplicateParameter { .. })
    }
}
