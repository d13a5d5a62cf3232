use crate::{
    ast::{Expr, Statement},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::{Binding, Environment},
        evaluator::core::{Evaluator, Limits},
        lexer::tokenize,
        parser::{core::check_nesting_depth, statement::parse_statement},
    },
};

/// What executing one line did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An expression was evaluated and its value should be printed.
    Value(f64),
    /// A variable was bound.
    Assigned {
        /// The name of the variable.
        name:  String,
        /// The value it now holds.
        value: f64,
    },
    /// A function was bound.
    Defined {
        /// The name of the function.
        name:  String,
        /// Its number of parameters.
        arity: usize,
    },
    /// The line held nothing but whitespace.
    Blank,
}

/// Executes lines one at a time against the environment of a single run.
///
/// A line either fully succeeds or leaves the environment exactly as it was.
///
/// ## Example
/// ```
/// use numerus::interpreter::session::{Outcome, Session};
///
/// let mut session = Session::new();
///
/// session.execute_line("f(a, b) = a + b").unwrap();
/// session.execute_line("x = 5").unwrap();
/// assert_eq!(session.execute_line("f(x, 1)").unwrap(), Outcome::Value(6.0));
///
/// assert!(session.execute_line("f(2)").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    limits:      Limits,
}

impl Session {
    /// Creates a session with an empty environment and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an empty environment and explicit limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { environment: Environment::new(),
               limits }
    }

    /// The bindings made so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The limits applied to every evaluation.
    #[must_use]
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    /// Forgets every binding.
    pub fn reset(&mut self) {
        self.environment.clear();
    }

    /// Tokenizes, parses and executes one line.
    ///
    /// Lines nested deeper than [`Limits::max_nesting_depth`] are rejected
    /// before parsing.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or evaluation error of the line. The
    /// environment is unchanged in that case.
    pub fn execute_line(&mut self, source: &str) -> Result<Outcome, Error> {
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Ok(Outcome::Blank);
        }
        check_nesting_depth(&tokens, self.limits.max_nesting_depth)?;

        let statement = parse_statement(&mut tokens.iter().peekable())?;
        self.execute(statement)
    }

    /// Executes an already parsed statement.
    ///
    /// Variable assignments evaluate their right-hand side first and bind
    /// the name only if that succeeds. Function assignments store the body
    /// unevaluated.
    ///
    /// # Errors
    /// - [`ParseError::RecursiveDefinition`] for a function whose body calls
    ///   itself.
    /// - Any [`RuntimeError`] raised while evaluating.
    pub fn execute(&mut self, statement: Statement) -> Result<Outcome, Error> {
        match statement {
            Statement::VariableAssignment { name, value } => {
                let value = self.evaluate(&value)?;
                self.environment.set(name.clone(), Binding::Variable(value));
                Ok(Outcome::Assigned { name, value })
            },
            Statement::FunctionAssignment(def) => {
                if def.is_directly_recursive() {
                    return Err(ParseError::RecursiveDefinition { name: def.name }.into());
                }

                let arity = def.params.len();
                self.environment.set(def.name.clone(),
                                     Binding::Function { params: def.params,
                                                         body:   def.body, });
                Ok(Outcome::Defined { name: def.name,
                                      arity })
            },
            Statement::Expression { expr } => Ok(Outcome::Value(self.evaluate(&expr)?)),
        }
    }

    /// Evaluates an expression against the current bindings.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating.
    pub fn evaluate(&self, expr: &Expr) -> Result<f64, RuntimeError> {
        Evaluator::with_limits(&self.environment, self.limits).evaluate(expr)
    }
}
