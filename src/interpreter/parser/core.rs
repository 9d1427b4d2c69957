use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive, rewriter::DEGREE_MARKER},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, calls, prefix signs and exponents the
/// parser descends into.
pub const MAX_DEPTH: usize = 128;

/// Tallest expression tree the parser builds. The evaluator recurses once
/// per level of the tree.
pub const MAX_HEIGHT: usize = 1024;

/// Parses a complete token sequence into a single expression tree.
///
/// The whole input must form exactly one expression; leftover tokens are an
/// error rather than being silently ignored.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens at all.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - `NestingTooDeep` past [`MAX_DEPTH`] levels of nesting or a tree
///   taller than [`MAX_HEIGHT`].
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use calcrs::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
///
/// assert!(parse(&tokenize("1 +").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing inside parentheses and at
/// the top level. It starts at the lowest-precedence level, addition, and
/// accepts an optional trailing degree marker that applies to the whole
/// expression before it.
///
/// Grammar: `expression := additive ["deg"]`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: How many levels of nesting enclose this expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_additive(tokens, depth)?;

    if let Some((Token::Identifier(name), position)) = tokens.peek()
       && name == DEGREE_MARKER
    {
        tokens.next();
        return bounded(Expr::UnaryOp { op:       UnaryOperator::Degrees,
                                       expr:     Box::new(expr),
                                       position: *position, });
    }

    Ok(expr)
}

/// Fails once `depth` passes [`MAX_DEPTH`].
///
/// Called before every recursive descent; `position` is the token the parser
/// is about to read.
pub(in crate::interpreter::parser) const fn check_depth(depth: usize,
                                                        position: usize)
                                                        -> ParseResult<()> {
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(())
}

/// Passes a freshly built node through if its tree is at most
/// [`MAX_HEIGHT`] high.
///
/// Long left-associative chains such as `1+1+...+1` grow the tree without
/// recursing in the parser, so height is checked on the tree itself.
pub(in crate::interpreter::parser) fn bounded(expr: Expr) -> ParseResult<Expr> {
    if expr.height() > MAX_HEIGHT {
        return Err(ParseError::NestingTooDeep { position: expr.position() });
    }
    Ok(expr)
}
