use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary arithmetic operation on two numbers.
    ///
    /// Division by zero is checked explicitly, so `x / 0` and `0 / 0` are
    /// errors rather than infinities or `NaN`. Any other result that leaves
    /// the finite range is an [`EvalError::Overflow`].
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use arrayexpr::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary_op(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
    /// assert_eq!(result, 3.0);
    /// assert!(Context::eval_binary_op(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_binary_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          position: usize)
                          -> EvalResult<f64> {
        let result = match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left / right
            },
        };

        if !result.is_finite() {
            return Err(EvalError::Overflow { op, position });
        }
        Ok(result)
    }
}
