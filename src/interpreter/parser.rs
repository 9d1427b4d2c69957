/// Entry point and shared parser types.
///
/// Declares the `ParseResult` alias, the top-level `parse` function that
/// rejects empty input and trailing tokens, and the expression rule that
/// accepts the trailing degree marker.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponent precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, references, grouping and function calls.
pub mod unary;

/// Helpers shared by the parsing levels.
pub mod utils;

pub use self::core::parse;
