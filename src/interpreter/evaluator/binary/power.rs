use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::domain_error,
    },
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Results that have no real value are domain errors: a negative base
    /// with a fractional exponent, and zero raised to a negative power.
    /// Results that are real but too large for `f64` are left as infinity for
    /// the finiteness check to report.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 10.0, 0).unwrap(), 1024.0);
    /// assert_eq!(Evaluator::eval_pow(-8.0, 2.0, 0).unwrap(), 64.0);
    /// assert!(Evaluator::eval_pow(-8.0, 0.5, 0).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64, position: usize) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(domain_error(BinaryOperator::Pow.to_string(), &[base, exponent], position));
        }

        let result = base.powf(exponent);
        if result.is_nan() {
            return Err(domain_error(BinaryOperator::Pow.to_string(), &[base, exponent], position));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::RuntimeError, interpreter::evaluator::core::Evaluator};

    #[test]
    fn integer_and_fractional_exponents() {
        assert_eq!(Evaluator::eval_pow(9.0, 0.5, 0).unwrap(), 3.0);
        assert_eq!(Evaluator::eval_pow(2.0, -1.0, 0).unwrap(), 0.5);
        assert_eq!(Evaluator::eval_pow(-2.0, 3.0, 0).unwrap(), -8.0);
        assert_eq!(Evaluator::eval_pow(0.0, 0.0, 0).unwrap(), 1.0);
    }

    #[test]
    fn zero_to_negative_power_is_undefined() {
        assert!(matches!(Evaluator::eval_pow(0.0, -2.0, 3),
                         Err(RuntimeError::ArithmeticDomain { position: 3, .. })));
    }

    #[test]
    fn overflow_is_left_for_the_finiteness_check() {
        assert_eq!(Evaluator::eval_pow(10.0, 400.0, 0).unwrap(), f64::INFINITY);
    }
}
