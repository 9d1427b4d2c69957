/// Core evaluation logic.
///
/// Contains the `Evaluator` type, the result alias and the dispatch over
/// expression variants.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation, unary plus and the degree marker.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators and exponentiation, including
/// the checks that turn undefined results into errors.
pub mod binary;

/// Function evaluation.
///
/// Looks up builtin functions by name and applies them to their argument.
pub mod function;

/// Utility functions for the evaluator.
///
/// Provides per-variant evaluation helpers, constant lookup and the
/// finiteness check shared by every node.
pub mod utils;
