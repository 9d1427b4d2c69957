use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are routed to `eval_scalar_op`, exponentiation to
    /// `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use calcrs::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, 3.0, 4.0, 0);
    /// assert_eq!(result.unwrap(), 7.0);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, position),
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
