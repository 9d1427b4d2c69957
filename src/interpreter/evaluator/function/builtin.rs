use crate::interpreter::evaluator::core::EvalResult;

/// Applies a builtin that is defined for every finite real input.
///
/// The generated functions take the evaluated argument and the position of
/// the call. Overflow (e.g. `exp(1000)`) is reported by the evaluator's
/// finiteness check, so these never fail themselves.
///
/// # Example
/// ```
/// use calcrs::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(std::f64::consts::PI / 2.0, 0).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! total_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[allow(clippy::unnecessary_wraps)]
        pub fn $fname(x: f64, _position: usize) -> EvalResult<f64> {
            Ok(x.$real_fn())
        }
    };
}

total_builtin!(sin, sin);
total_builtin!(cos, cos);
total_builtin!(tan, tan);
total_builtin!(exp, exp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radian_inputs() {
        assert_eq!(sin(0.0, 0).unwrap(), 0.0);
        assert_eq!(cos(0.0, 0).unwrap(), 1.0);
        assert!((tan(std::f64::consts::FRAC_PI_4, 0).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(exp(0.0, 0).unwrap(), 1.0);
    }
}
