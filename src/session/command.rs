/// Constants with a dedicated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// `π`, rewritten to `pi` before evaluation.
    Pi,
    /// Euler's number, typed as `e`.
    E,
}

impl Constant {
    /// The text the key appends to the buffer.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }
}

/// Function keys. Each one appends a call prefix to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `sin(`, argument in degrees.
    Sin,
    /// `cos(`, argument in degrees.
    Cos,
    /// `tan(`, argument in degrees.
    Tan,
    /// Natural logarithm key; inserts `log(`.
    Ln,
    /// Common logarithm key; inserts `log10(`.
    Log,
    /// Square root key (`√`); inserts `sqrt(`.
    Sqrt,
    /// `exp(`.
    Exp,
}

impl Function {
    /// The call prefix the key appends to the buffer.
    ///
    /// Note the logarithm keys: `ln` inserts the evaluator's `log` (natural
    /// logarithm) and `log` inserts `log10`.
    ///
    /// # Example
    /// ```
    /// use calcrs::session::command::Function;
    ///
    /// assert_eq!(Function::Ln.prefix(), "log(");
    /// assert_eq!(Function::Log.prefix(), "log10(");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Sin => "sin(",
            Self::Cos => "cos(",
            Self::Tan => "tan(",
            Self::Ln => "log(",
            Self::Log => "log10(",
            Self::Sqrt => "sqrt(",
            Self::Exp => "exp(",
        }
    }
}

/// A user action on the calculator.
///
/// Every command except `Evaluate` only edits the buffer, the memory
/// register or the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append literal text (digits, operators, parentheses).
    Append(String),
    /// Empty the buffer.
    Clear,
    /// Delete the last character.
    Backspace,
    /// Flip the sign of the whole buffer.
    ToggleSign,
    /// Evaluate the buffer.
    Evaluate,
    /// Store the buffer's leading number in memory.
    MemoryStore,
    /// Replace the buffer with the memory value.
    MemoryRecall,
    /// Reset memory to zero.
    MemoryClear,
    /// Append a reference to the last answer.
    Answer,
    /// Append a constant symbol.
    InsertConstant(Constant),
    /// Append a function call prefix.
    InsertFunction(Function),
    /// Append a percent sign.
    Percent,
    /// Append the power operator.
    Power,
    /// Forget all history entries.
    ClearHistory,
}

impl Command {
    /// Maps a keypad label to its command.
    ///
    /// Unlabelled keys (digits, `.`, `+`, `(`, ...) append their label.
    ///
    /// # Example
    /// ```
    /// use calcrs::session::command::{Command, Function};
    ///
    /// assert_eq!(Command::from_key("="), Command::Evaluate);
    /// assert_eq!(Command::from_key("√"), Command::InsertFunction(Function::Sqrt));
    /// assert_eq!(Command::from_key("7"), Command::Append("7".to_string()));
    /// ```
    #[must_use]
    pub fn from_key(label: &str) -> Self {
        match label {
            "C" => Self::Clear,
            "⌫" => Self::Backspace,
            "±" => Self::ToggleSign,
            "=" => Self::Evaluate,
            "MC" => Self::MemoryClear,
            "MR" => Self::MemoryRecall,
            "MS" => Self::MemoryStore,
            "ans" => Self::Answer,
            "π" => Self::InsertConstant(Constant::Pi),
            "e" => Self::InsertConstant(Constant::E),
            "^" => Self::Power,
            "%" => Self::Percent,
            "√" => Self::InsertFunction(Function::Sqrt),
            "sin" => Self::InsertFunction(Function::Sin),
            "cos" => Self::InsertFunction(Function::Cos),
            "tan" => Self::InsertFunction(Function::Tan),
            "ln" => Self::InsertFunction(Function::Ln),
            "log" => Self::InsertFunction(Function::Log),
            "exp" => Self::InsertFunction(Function::Exp),
            other => Self::Append(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::core::Evaluator;

    const FUNCTIONS: [Function; 7] = [Function::Sin,
                                      Function::Cos,
                                      Function::Tan,
                                      Function::Ln,
                                      Function::Log,
                                      Function::Sqrt,
                                      Function::Exp];

    #[test]
    fn every_function_key_inserts_a_builtin() {
        for function in FUNCTIONS {
            let name = function.prefix().trim_end_matches('(');
            assert!(Evaluator::lookup_function(name, 0).is_ok(),
                    "{function:?} inserts unknown {name}");
        }
    }

    #[test]
    fn keypad_labels() {
        assert_eq!(Command::from_key("C"), Command::Clear);
        assert_eq!(Command::from_key("⌫"), Command::Backspace);
        assert_eq!(Command::from_key("±"), Command::ToggleSign);
        assert_eq!(Command::from_key("MS"), Command::MemoryStore);
        assert_eq!(Command::from_key("MR"), Command::MemoryRecall);
        assert_eq!(Command::from_key("MC"), Command::MemoryClear);
        assert_eq!(Command::from_key("ans"), Command::Answer);
        assert_eq!(Command::from_key("π"), Command::InsertConstant(Constant::Pi));
        assert_eq!(Command::from_key("ln"), Command::InsertFunction(Function::Ln));
        assert_eq!(Command::from_key("%"), Command::Percent);
        assert_eq!(Command::from_key("÷"), Command::Append("÷".to_string()));
    }
}
