/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// line. Parse errors include unrecognized characters, syntax mistakes and
/// function definitions that call themselves.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression, such as division by zero, unknown names or a mismatched number
/// of call arguments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts the processing of a single line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Whether the error signals resource exhaustion rather than a mistake in
    /// the program text.
    ///
    /// A fatal error still aborts only the current line. The caller decides
    /// whether the run continues.
    ///
    /// ```
    /// use numerus::error::{Error, ParseError, RuntimeError};
    ///
    /// assert!(Error::from(RuntimeError::CallDepthExceeded { limit: 8 }).is_fatal());
    /// assert!(Error::from(ParseError::NestingTooDeep { limit: 8 }).is_fatal());
    /// assert!(!Error::from(RuntimeError::DivisionByZero).is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self,
                 Self::Runtime(RuntimeError::CallDepthExceeded { .. })
                 | Self::Parse(ParseError::NestingTooDeep { .. }))
    }
}

/// An [`Error`] tagged with the 1-based number of the line that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}: {error}")]
pub struct LineError {
    /// The source line where the error occurred.
    pub line:  usize,
    /// The underlying failure.
    #[source]
    pub error: Error,
}

impl LineError {
    /// Attaches a line number to an error.
    #[must_use]
    pub const fn new(line: usize, error: Error) -> Self {
        Self { line, error }
    }
}
