use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        parser::core::MAX_NESTING_DEPTH,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on how deeply function calls may nest.
pub const MAX_CALL_DEPTH: usize = 200;

/// Resource limits applied while processing a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// How many calls may be active at once before evaluation gives up with
    /// [`RuntimeError::CallDepthExceeded`].
    pub max_call_depth:    usize,
    /// How deeply one line may nest before it is rejected with
    /// [`ParseError::NestingTooDeep`].
    ///
    /// [`ParseError::NestingTooDeep`]: crate::error::ParseError::NestingTooDeep
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_call_depth:    MAX_CALL_DEPTH,
               max_nesting_depth: MAX_NESTING_DEPTH, }
    }
}

/// Parameter bindings of the call currently being evaluated.
///
/// The top level has an empty frame at depth zero. Each call creates a fresh
/// frame holding only its own parameters, so a callee never sees the
/// parameters of its caller.
#[derive(Debug, Default)]
pub struct Frame<'env> {
    pub(crate) locals: HashMap<&'env str, f64>,
    pub(crate) depth:  usize,
}

impl Frame<'_> {
    /// The frame used outside of any call.
    #[must_use]
    pub fn global() -> Self {
        Self::default()
    }
}

/// Evaluates expressions against a borrowed [`Environment`].
///
/// The evaluator never changes the environment. Assignments are applied by
/// the caller once evaluation has succeeded.
///
/// ## Example
/// ```
/// use numerus::interpreter::{
///     environment::{Binding, Environment},
///     evaluator::core::Evaluator,
///     parser::core::parse_expression_str,
/// };
///
/// let mut env = Environment::new();
/// env.set("x", Binding::Variable(5.0));
///
/// let expr = parse_expression_str("x + 1").unwrap();
/// assert_eq!(Evaluator::new(&env).evaluate(&expr), Ok(6.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'env> {
    pub(crate) env:    &'env Environment,
    pub(crate) limits: Limits,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator with the default [`Limits`].
    #[must_use]
    pub fn new(env: &'env Environment) -> Self {
        Self::with_limits(env, Limits::default())
    }

    /// Creates an evaluator with explicit limits.
    #[must_use]
    pub const fn with_limits(env: &'env Environment, limits: Limits) -> Self {
        Self { env, limits }
    }

    /// Evaluates an expression at the top level and returns its value.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while walking the tree. The first error
    /// aborts the evaluation.
    pub fn evaluate(&self, expr: &'env Expr) -> EvalResult<f64> {
        self.eval(expr, &Frame::global())
    }

    /// Evaluates an expression within `frame`.
    ///
    /// The evaluator dispatches based on expression variant. Operands are
    /// evaluated left before right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `frame`: Parameter bindings of the enclosing call.
    pub(crate) fn eval(&self, expr: &'env Expr, frame: &Frame<'env>) -> EvalResult<f64> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::Variable { name } => self.eval_variable(name, frame),
            Expr::Call { name, arguments } => self.eval_call(name, arguments, frame),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::UnaryMinus { operand } => Ok(-self.eval(operand, frame)?),
        }
    }

    /// Resolves a variable, preferring the parameters of the current call
    /// over global bindings.
    fn eval_variable(&self, name: &str, frame: &Frame<'env>) -> EvalResult<f64> {
        if let Some(value) = frame.locals.get(name) {
            return Ok(*value);
        }

        match self.env.get(name) {
            Some(Binding::Variable(value)) => Ok(*value),
            Some(Binding::Function { .. }) => {
                Err(RuntimeError::NotAVariable { name: name.to_string() })
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
        }
    }
}
