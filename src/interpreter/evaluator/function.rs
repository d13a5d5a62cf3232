use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Binding,
        evaluator::core::{EvalResult, Evaluator, Frame},
    },
};

impl<'env> Evaluator<'env> {
    /// Evaluates a call to a user-defined function.
    ///
    /// The name is resolved through the same view as variables, so a
    /// parameter of the current call hides a global function of the same
    /// name. The parameter count must match the number of arguments.
    /// Arguments are evaluated in the caller's frame, left to right, and
    /// bound to the parameter names in a fresh frame. The body is then
    /// evaluated in that frame.
    ///
    /// # Errors
    /// - Unknown function name, or a name bound to a value.
    /// - Wrong number of arguments.
    /// - Calls nested deeper than [`Limits::max_call_depth`].
    /// - Any error raised by an argument or the body.
    ///
    /// [`Limits::max_call_depth`]: crate::interpreter::evaluator::core::Limits::max_call_depth
    pub(crate) fn eval_call(&self,
                            name: &str,
                            arguments: &'env [Expr],
                            frame: &Frame<'env>)
                            -> EvalResult<f64> {
        let binding = if frame.locals.contains_key(name) {
            None
        } else {
            self.env.get(name)
        };

        let Some(Binding::Function { params, body }) = binding else {
            return Err(RuntimeError::UndefinedFunction { name: name.to_string() });
        };

        if params.len() != arguments.len() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: params.len(),
                                                     found:    arguments.len(), });
        }

        let depth = frame.depth + 1;
        if depth > self.limits.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.limits.max_call_depth });
        }

        let mut locals = HashMap::with_capacity(params.len());
        for (param, argument) in params.iter().zip(arguments) {
            locals.insert(param.as_str(), self.eval(argument, frame)?);
        }

        let callee = Frame { locals, depth };
        self.eval(body, &callee)
    }
}
