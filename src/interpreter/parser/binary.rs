use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, bounded},
            unary::{parse_primary, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = bounded(Expr::BinaryOp { left: Box::new(left),
                                            op,
                                            right: Box::new(right),
                                            position: *position })?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Every operator must be
/// written out; two operands side by side are not a product.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = bounded(Expr::BinaryOp { left: Box::new(left),
                                            op,
                                            right: Box::new(right),
                                            position: *position })?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation.
///
/// `^` is right-associative and binds tighter than a prefix sign on its
/// left, so `-2^2` is `-(2^2)`. The exponent itself is a unary expression,
/// which allows `2^-1` and makes `2^3^2` parse as `2^(3^2)`.
///
/// The rule is: `exponent := primary ["^" unary]`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth; the exponent is one level deeper.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_primary(tokens, depth)?;

    if let Some((Token::Caret, position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, depth + 1)?;
        return bounded(Expr::BinaryOp { left:     Box::new(base),
                                        op:       BinaryOperator::Pow,
                                        right:    Box::new(exponent),
                                        position: *position, });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use calcrs::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
