use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::{builtin, log, sqrt},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated argument and the source position of the
/// call, and returns the result or a domain error.
pub type BuiltinFn = fn(f64, usize) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry maps a string name to a function pointer implementing the
/// builtin.
///
/// The macro produces `BuiltinDef` (internal metadata) and `BUILTIN_TABLE`
/// (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
    };
}

// `log` is the natural logarithm and `log10` the common one. The keypad's
// `ln` key inserts `log(` and its `log` key inserts `log10(`.
builtin_functions! {
    "sin"   => builtin::sin,
    "cos"   => builtin::cos,
    "tan"   => builtin::tan,
    "exp"   => builtin::exp,
    "log"   => log::ln,
    "log10" => log::log10,
    "sqrt"  => sqrt::sqrt,
}

impl Evaluator<'_> {
    /// Resolves a builtin function by name.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `position`: Source position of the call.
    ///
    /// # Returns
    /// The function pointer implementing the builtin.
    ///
    /// # Errors
    /// `UnknownFunction` if no builtin has that name.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::evaluator::core::Evaluator;
    ///
    /// let sqrt = Evaluator::lookup_function("sqrt", 0).unwrap();
    /// assert_eq!(sqrt(16.0, 0).unwrap(), 4.0);
    ///
    /// assert!(Evaluator::lookup_function("ln", 0).is_err());
    /// ```
    pub fn lookup_function(name: &str, position: usize) -> EvalResult<BuiltinFn> {
        BUILTIN_TABLE.iter()
                     .find(|b| b.name == name)
                     .map(|b| b.func)
                     .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                    position })
    }
}
