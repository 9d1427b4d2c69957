use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::domain_error,
    },
};

impl Evaluator<'_> {
    /// Evaluates a real arithmetic operation.
    ///
    /// Division by zero is checked explicitly and reported as a domain error
    /// instead of producing an infinity. Overflow is left to the finiteness
    /// check that runs on every node. `Pow` is handed to
    /// [`Evaluator::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use calcrs::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// assert!(Evaluator::eval_scalar_op(BinaryOperator::Div, 5.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          position: usize)
                          -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(domain_error(Div.to_string(), &[left, right], position));
                }
                left / right
            },
            Pow => return Self::eval_pow(left, right, position),
        })
    }
}
