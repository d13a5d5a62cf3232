use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// `+`, `-`, `*` and `/` follow IEEE 754 arithmetic. Division and
    /// remainder by zero (of either sign) are errors. The remainder takes the
    /// sign of the dividend. Exponentiation uses `powf` and fails when the
    /// result is not finite, such as a negative base with a fractional
    /// exponent.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use numerus::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Mod, -7.0, 3.0), Ok(-1.0));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div | Mod => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(if op == Div { left / right } else { left % right })
            },
            Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates `base ^ exponent`, rejecting results that are not finite.
    fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        let result = base.powf(exponent);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(RuntimeError::InvalidOperation { details: format!("{base} ^ {exponent} has no finite value") })
        }
    }
}
