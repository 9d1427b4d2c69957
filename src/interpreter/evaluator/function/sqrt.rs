use crate::interpreter::evaluator::{core::EvalResult, utils::domain_error};

/// Computes the real square root.
///
/// Negative inputs have no real square root and produce an
/// `ArithmeticDomain` error rather than a complex value.
///
/// # Parameters
/// - `x`: The radicand.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// The non-negative square root of `x`.
///
/// # Example
/// ```
/// use calcrs::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(9.0, 0).unwrap(), 3.0);
/// assert!(sqrt(-4.0, 0).is_err());
/// ```
pub fn sqrt(x: f64, position: usize) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(domain_error("sqrt", &[x], position));
    }
    Ok(x.sqrt())
}
