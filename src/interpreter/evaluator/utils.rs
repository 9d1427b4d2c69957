use std::f64::consts::{E, PI};

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

/// Name of the reference that reads the last-answer register.
pub const ANSWER_REGISTER: &str = "ans";

/// Named mathematical constants.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI), ("e", E)];

impl Evaluator<'_> {
    /// Looks up a reference by name.
    ///
    /// Reference lookup checks, in order:
    /// 1. The last-answer register (`ans`).
    /// 2. The named constants (`pi`, `e`).
    ///
    /// If the name is not found, an `UnknownReference` error is returned.
    ///
    /// # Parameters
    /// - `name`: Reference name.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// The value of the reference.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::{evaluator::core::Evaluator, registers::Registers};
    ///
    /// let mut registers = Registers::new();
    /// registers.set_last_answer(42.0).unwrap();
    ///
    /// let evaluator = Evaluator::new(&registers);
    /// assert_eq!(evaluator.eval_reference("ans", 0).unwrap(), 42.0);
    /// assert!(evaluator.eval_reference("x", 0).is_err());
    /// ```
    pub fn eval_reference(&self, name: &str, position: usize) -> EvalResult<f64> {
        if name == ANSWER_REGISTER {
            return Ok(self.registers.last_answer());
        }
        if let Some((_, value)) = CONSTANTS.iter().find(|(n, _)| *n == name) {
            return Ok(*value);
        }
        Err(RuntimeError::UnknownReference { name: name.to_string(),
                                             position })
    }

    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: Operand expression.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Evaluates a binary operator applied to two subexpressions.
    ///
    /// The left operand is evaluated first, so its errors win.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The binary operator.
    /// - `right`: Right operand expression.
    /// - `position`: Source position of the operator.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          position: usize)
                          -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, left, right, position)
    }

    /// Evaluates a function call.
    ///
    /// The function name is resolved before the argument is evaluated, so a
    /// misspelled name is reported even if its argument would also fail.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `argument`: Argument expression.
    /// - `position`: Source position of the call.
    ///
    /// # Returns
    /// The function result.
    pub fn eval_call(&self, name: &str, argument: &Expr, position: usize) -> EvalResult<f64> {
        let function = Self::lookup_function(name, position)?;
        let value = self.eval(argument)?;
        function(value, position)
    }

    /// Ensures a computed value is a finite real number.
    ///
    /// # Errors
    /// `NonFiniteResult` for infinities and NaN.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::check_finite(1.5, 0).unwrap(), 1.5);
    /// assert!(Evaluator::check_finite(f64::INFINITY, 0).is_err());
    /// ```
    pub fn check_finite(value: f64, position: usize) -> EvalResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RuntimeError::NonFiniteResult { position })
        }
    }
}

/// Builds the domain error reported for `op` applied to `operands`.
pub fn domain_error(op: impl Into<String>, operands: &[f64], position: usize) -> RuntimeError {
    RuntimeError::ArithmeticDomain { op: op.into(),
                                     operands: operands.to_vec(),
                                     position }
}
