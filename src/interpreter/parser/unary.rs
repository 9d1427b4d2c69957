use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, bounded, check_depth, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// What the parser reports when it needs an operand and finds none.
const OPERAND: &str = "a number, name or '('";

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators are right-associative, so `--x` is `-(-x)`. They bind
/// looser than `^`: the operand is parsed by [`parse_exponent`].
///
/// Every recursive path through the grammar passes through here, so this is
/// where the nesting limit is enforced.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
///
/// # Errors
/// `NestingTooDeep` once `depth` passes the limit.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((_, position)) = tokens.peek() {
        check_depth(depth, *position)?;
    }

    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_exponent(tokens, depth),
    };

    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: OPERAND });
    };
    let expr = parse_unary(tokens, depth + 1)?;
    bounded(Expr::UnaryOp { op,
                            expr: Box::new(expr),
                            position: *position })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - references to constants and registers
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT "(" expression ")"
///              | IDENT
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// `UnexpectedEndOfInput` or `UnexpectedToken` when no operand starts here,
/// e.g. in `2 *` or `3 * )`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    *value,
                                                                     position: *position, }),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position, depth + 1),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_function(tokens, name, *position, depth + 1)
        },
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   expected: OPERAND,
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: OPERAND }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`; the opening parenthesis has already been
/// consumed. Failure to find the closing parenthesis yields
/// `ParseError::ExpectedClosingParen` pointing at the opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `opening`: Position of the `(`.
/// - `depth`: Nesting depth inside the parentheses.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         opening: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   expected: "')'",
                                                                   position: *position, }),
        None => Err(ParseError::ExpectedClosingParen { position: opening }),
    }
}

/// Parses either a reference or a function call.
///
/// An identifier directly followed by `(` is a call; every builtin takes
/// exactly one argument, so any other argument count is rejected here.
/// Otherwise the identifier is a reference. Whether the name exists is not
/// checked until evaluation.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the identifier.
/// - `name`: The identifier.
/// - `position`: Position of the identifier.
/// - `depth`: Nesting depth inside the argument list.
///
/// # Returns
/// An [`Expr::Call`] or [`Expr::Reference`].
///
/// # Errors
/// `ArgumentCountMismatch` for `f()` or `f(a, b)`, plus any error from the
/// argument list.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       position: usize,
                                       depth: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((Token::LParen, opening)) = tokens.peek() else {
        return Ok(Expr::Reference { name: name.to_string(),
                                    position });
    };
    let opening = *opening;
    tokens.next();

    let mut arguments =
        parse_comma_separated(tokens, |tokens| parse_expression(tokens, depth), opening)?;
    if arguments.len() != 1 {
        return Err(ParseError::ArgumentCountMismatch { name: name.to_string(),
                                                       found: arguments.len(),
                                                       position });
    }

    bounded(Expr::Call { name: name.to_string(),
                         argument: Box::new(arguments.remove(0)),
                         position })
}
