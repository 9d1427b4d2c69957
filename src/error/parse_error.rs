#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the rewritten expression text.
pub enum ParseError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// The input contained nothing but whitespace.
    EmptyExpression,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for instead.
        expected: &'static str,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the matching `(` was opened.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the extra token starts.
        position: usize,
    },
    /// A function was called with other than exactly one argument.
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// How many arguments were supplied.
        found:    usize,
        /// Where the call starts.
        position: usize,
    },
    /// Parentheses, signs or operators are nested deeper than the parser
    /// allows.
    NestingTooDeep {
        /// Where the nesting limit was crossed.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at {position}: Unexpected character '{character}'.")
            },

            Self::EmptyExpression => write!(f, "Error: Empty expression."),

            Self::UnexpectedToken { token,
                                    expected,
                                    position, } => {
                write!(f, "Error at {position}: Unexpected token '{token}', expected {expected}.")
            },

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Error: Unexpected end of input, expected {expected}.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at {position}: Extra tokens after expression. Check your input: {token}"),

            Self::ArgumentCountMismatch { name,
                                          found,
                                          position, } => write!(f,
                                                                "Error at {position}: Function {name} takes exactly one argument, found {found}."),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
