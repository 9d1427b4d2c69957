//! # calcrs
//!
//! calcrs is the engine of a scientific calculator written in Rust.
//! It rewrites keypad syntax, tokenizes, parses and evaluates the expression
//! a user typed, and keeps the calculator's memory and last-answer registers
//! together with the editable buffer and evaluation history.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Evaluator, lexer::tokenize, parser::parse, registers::Registers,
        rewriter::rewrite,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for every supported construct.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and the `Error` type that wraps
/// them for the pipeline as a whole.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and operands for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together rewriting, lexing, parsing, evaluation and the
/// registers the evaluator reads.
///
/// # Responsibilities
/// - Coordinates all core components: rewriter, lexer, parser, evaluator.
/// - Provides entry points for each stage so they can be used and tested
///   on their own.
pub mod interpreter;
/// The calculator session driven by a user interface.
///
/// This module owns the editable buffer, the registers and the history, and
/// maps keypad commands onto them. Evaluation failures are shown as `Error`
/// and never change accumulated state.
///
/// # Responsibilities
/// - Applies buffer-editing and memory commands.
/// - Runs the pipeline on evaluate and records successful results.
/// - Keeps the history with a fixed-size display window.
pub mod session;
/// General utilities for number display.
///
/// # Responsibilities
/// - Format results as re-enterable text.
/// - Read the numeric prefix of a buffer.
pub mod util;

/// Evaluates an expression typed by the user.
///
/// Runs the full pipeline: rewrite → tokenize → parse → evaluate. The
/// registers are only read; storing the result as the last answer is the
/// caller's job.
///
/// # Errors
/// Returns the first error any stage raises.
///
/// # Examples
/// ```
/// use calcrs::{evaluate, interpreter::registers::Registers};
///
/// let registers = Registers::new();
///
/// assert_eq!(evaluate("2*(3+4)", &registers).unwrap(), 14.0);
/// assert!((evaluate("sin(90)", &registers).unwrap() - 1.0).abs() < 1e-12);
/// assert!((evaluate("200+10%", &registers).unwrap() - 200.1).abs() < 1e-12);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate("5/0", &registers).is_err());
/// ```
pub fn evaluate(source: &str, registers: &Registers) -> Result<f64, Error> {
    let rewritten = rewrite(source);
    let tokens = tokenize(&rewritten)?;
    let expr = parse(&tokens)?;
    let value = Evaluator::new(registers).eval(&expr)?;

    log::debug!("evaluated {source:?} as {rewritten:?} = {value}");
    Ok(value)
}
