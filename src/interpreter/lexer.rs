use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a calculator expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; constants, registers, units and function names
    /// such as `pi`, `ans`, `deg` or `log10`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Literals too large for `f64` become
///   infinity and are rejected by the evaluator.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression into `(Token, position)` pairs.
///
/// Positions are byte offsets of each token's first character. Whitespace is
/// skipped. The first character that cannot start a token aborts
/// tokenization.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for an unrecognized character,
/// including a decimal point that is not attached to any digit.
///
/// # Example
/// ```
/// use calcrs::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * pi").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 2),
///                 (Token::Identifier("pi".to_string()), 4)]);
///
/// assert!(tokenize("3 $ 4").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let character = source[position..].chars().next().unwrap_or('\0');
                return Err(ParseError::UnexpectedCharacter { character, position });
            },
        }
    }

    log::trace!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn numbers_with_fraction_and_exponent() {
        assert_eq!(kinds("12 3.5 .25 4. 1e3 2.5E-2"),
                   vec![Token::Number(12.0),
                        Token::Number(3.5),
                        Token::Number(0.25),
                        Token::Number(4.0),
                        Token::Number(1000.0),
                        Token::Number(0.025)]);
    }

    #[test]
    fn identifiers_may_contain_digits() {
        assert_eq!(kinds("log10(x)"),
                   vec![Token::Identifier("log10".to_string()),
                        Token::LParen,
                        Token::Identifier("x".to_string()),
                        Token::RParen]);
    }

    #[test]
    fn operators_and_structure() {
        assert_eq!(kinds("+-*/^(),"),
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::Caret,
                        Token::LParen,
                        Token::RParen,
                        Token::Comma]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("  1 +  ans").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|(_, p)| *p).collect();
        assert_eq!(positions, vec![2, 4, 7]);
    }

    #[test]
    fn bare_decimal_point_is_rejected() {
        assert_eq!(tokenize("1 + ."),
                   Err(ParseError::UnexpectedCharacter { character: '.',
                                                         position:  4, }));
    }

    #[test]
    fn unknown_character_is_rejected() {
        assert_eq!(tokenize("2 # 3"),
                   Err(ParseError::UnexpectedCharacter { character: '#',
                                                         position:  2, }));
        assert!(matches!(tokenize("5%"),
                         Err(ParseError::UnexpectedCharacter { character: '%', .. })));
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
