/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression. Parse errors include unrecognized characters, missing
/// operands, unbalanced parentheses and trailing tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown references, division by zero, domain violations and overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the rewrite → tokenize → parse → evaluate pipeline.
///
/// Every stage fails fast, so an `Error` always describes the first problem
/// found in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
