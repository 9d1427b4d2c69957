/// Trigonometric and exponential builtins.
///
/// Thin wrappers over the `f64` methods of the same name.
pub mod builtin;
/// Logarithm function implementations.
///
/// Natural (`log`) and base-10 (`log10`) logarithms.
pub mod log;
/// The `sqrt` (square root) function implementation.
///
/// Computes real square roots only; negative input is a domain error.
pub mod sqrt;

pub mod core;
