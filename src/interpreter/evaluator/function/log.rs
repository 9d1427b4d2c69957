use crate::interpreter::evaluator::{core::EvalResult, utils::domain_error};

/// Computes the natural logarithm.
///
/// Exposed to expressions as `log`. Only positive arguments have a real
/// logarithm; zero and negative values produce an `ArithmeticDomain` error.
///
/// # Example
/// ```
/// use calcrs::interpreter::evaluator::function::log::ln;
///
/// let result = ln(std::f64::consts::E, 0).unwrap();
/// assert!((result - 1.0).abs() < 1e-12);
///
/// assert!(ln(0.0, 0).is_err());
/// ```
pub fn ln(x: f64, position: usize) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(domain_error("log", &[x], position));
    }
    Ok(x.ln())
}

/// Computes the base-10 logarithm.
///
/// Exposed to expressions as `log10`. Zero and negative values produce an
/// `ArithmeticDomain` error.
///
/// # Example
/// ```
/// use calcrs::interpreter::evaluator::function::log::log10;
///
/// assert!((log10(100.0, 0).unwrap() - 2.0).abs() < 1e-12);
/// assert!(log10(-1.0, 0).is_err());
/// ```
pub fn log10(x: f64, position: usize) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(domain_error("log10", &[x], position));
    }
    Ok(x.log10())
}
