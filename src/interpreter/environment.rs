use std::collections::HashMap;

use crate::ast::Expr;

/// What a name is bound to.
///
/// Variables and functions share one namespace, so a name holds at most one
/// binding of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A numeric variable, such as the result of `x = 5`.
    Variable(f64),
    /// A user-defined function, such as `f(a, b) = a + b`.
    Function {
        /// The parameter names in declaration order.
        params: Vec<String>,
        /// The body evaluated on each call.
        body:   Expr,
    },
}

impl Binding {
    /// Number of parameters for a function, `None` for a variable.
    #[must_use]
    pub const fn arity(&self) -> Option<usize> {
        match self {
            Self::Variable(_) => None,
            Self::Function { params, .. } => Some(params.len()),
        }
    }
}

/// The global store of bindings for one run.
///
/// An environment is created empty, changed only when an assignment line
/// executes, and dropped when the run ends. Evaluation only ever reads it.
///
/// ## Example
/// ```
/// use numerus::interpreter::environment::{Binding, Environment};
///
/// let mut env = Environment::new();
/// env.set("x", Binding::Variable(1.0));
/// env.set("x", Binding::Variable(2.0));
///
/// assert_eq!(env.get("x"), Some(&Binding::Variable(2.0)));
/// assert_eq!(env.get("y"), None);
/// assert_eq!(env.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the binding for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Binds `name`, replacing any earlier binding of either kind.
    ///
    /// Returns the replaced binding, if there was one.
    pub fn set(&mut self, name: impl Into<String>, binding: Binding) -> Option<Binding> {
        self.bindings.insert(name.into(), binding)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no name is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Iterates over all bindings ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        let mut entries = self.bindings
                              .iter()
                              .map(|(name, binding)| (name.as_str(), binding))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }
}
