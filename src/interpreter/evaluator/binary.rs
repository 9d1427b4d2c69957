/// Operator dispatch.
pub mod core;
/// Real arithmetic: `+`, `-`, `*`, `/`.
pub mod scalar;
/// Exponentiation.
pub mod power;
