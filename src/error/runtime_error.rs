use crate::util::num::format_number;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced a name that is neither a constant nor a register.
    UnknownReference {
        /// The name of the reference.
        name:     String,
        /// Where the reference starts.
        position: usize,
    },
    /// Called a function that is not a builtin.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call starts.
        position: usize,
    },
    /// The operation is mathematically undefined for its operands, e.g.
    /// division by zero or the square root of a negative number.
    ArithmeticDomain {
        /// The operator or function name.
        op:       String,
        /// The operands the operation was applied to.
        operands: Vec<f64>,
        /// Where the operation starts.
        position: usize,
    },
    /// The result could be computed but is not a finite real number.
    NonFiniteResult {
        /// Where the offending sub-expression starts.
        position: usize,
    },
    /// A register was asked to hold a non-finite value.
    NonFiniteRegister {
        /// The rejected value.
        value: f64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownReference { name, position } => {
                write!(f, "Error at {position}: Unknown reference '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at {position}: Unknown function '{name}'.")
            },
            Self::ArithmeticDomain { op,
                                     operands,
                                     position, } => {
                let operands = operands.iter()
                                       .map(|x| format_number(*x))
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "Error at {position}: {op} is undefined for ({operands}).")
            },
            Self::NonFiniteResult { position } => {
                write!(f, "Error at {position}: Result is not a finite number.")
            },
            Self::NonFiniteRegister { value } => {
                write!(f, "Error: Registers only hold finite numbers, got {value}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
