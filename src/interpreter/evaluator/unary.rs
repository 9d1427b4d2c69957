use crate::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Plus`: identity.
    /// - `Degrees`: reads the value as an angle in degrees and converts it to
    ///   radians, the unit the trigonometric builtins work in.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed value. No unary operator can fail on a finite input.
    ///
    /// # Example
    /// ```
    /// use calcrs::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, 5.0);
    /// assert_eq!(v, -5.0);
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Degrees, 180.0);
    /// assert!((v - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Plus => value,
            UnaryOperator::Degrees => value.to_radians(),
        }
    }
}
