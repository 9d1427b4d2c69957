use crate::{ast::Expr, error::RuntimeError, interpreter::registers::Registers};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees and computes their value.
///
/// The evaluator only reads the registers it was created with; it never
/// writes them. Storing a successful result as the last answer is up to the
/// caller, which keeps evaluation free of side effects.
///
/// ## Usage
///
/// ```
/// use calcrs::interpreter::{
///     evaluator::core::Evaluator, lexer::tokenize, parser::parse, registers::Registers,
/// };
///
/// let registers = Registers::new();
/// let expr = parse(&tokenize("2 * (3 + 4)").unwrap()).unwrap();
///
/// let value = Evaluator::new(&registers).eval(&expr).unwrap();
/// assert_eq!(value, 14.0);
/// ```
pub struct Evaluator<'a> {
    /// Read-only view of the memory and last-answer registers.
    pub registers: &'a Registers,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that resolves `ans` against `registers`.
    #[must_use]
    pub const fn new(registers: &'a Registers) -> Self {
        Self { registers }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant and checks that every
    /// intermediate value is finite, so the first undefined or overflowing
    /// step is the one reported.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// A finite `f64`.
    ///
    /// # Errors
    /// `UnknownReference`, `UnknownFunction`, `ArithmeticDomain` or
    /// `NonFiniteResult`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Reference { name, position } => self.eval_reference(name, *position),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::Call { name,
                         argument,
                         position, } => self.eval_call(name, argument, *position),
        }?;

        Self::check_finite(value, expr.position())
    }
}
