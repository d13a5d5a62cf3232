/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a name that has no binding.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a name that is not bound to a function.
    #[error("Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// Used a function name where a value was expected.
    #[error("'{name}' is a function and cannot be used as a value.")]
    NotAVariable {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were supplied.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments in the call.
        found:    usize,
    },
    /// Attempted division or remainder by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operation produced a result that is not a finite number.
    #[error("Invalid operation: {details}.")]
    InvalidOperation {
        /// Details about the failing operation.
        details: String,
    },
    /// Function calls nested deeper than the configured limit.
    #[error("Call depth limit of {limit} exceeded. Do two functions call each other?")]
    CallDepthExceeded {
        /// The limit that was hit.
        limit: usize,
    },
}
