/// An abstract syntax tree (AST) node representing a calculator expression.
///
/// `Expr` covers every construct the parser produces: number literals, named
/// references, prefix and unit operators, binary arithmetic and
/// single-argument function calls. Each variant records the byte offset of
/// the construct in the rewritten source for error reporting.
///
/// A tree is immutable once built and owned by a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal (e.g., `3.5`).
    Literal {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// Named reference resolved at evaluation time (e.g., `pi`, `ans`).
    Reference {
        /// The referenced name.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Unary operation (e.g., `-x`, `90 deg`).
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// Binary operation (e.g., `a + b`).
    BinaryOp {
        /// The left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// The right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Single-argument function call (e.g., `sqrt(2)`).
    Call {
        /// The function name.
        name:     String,
        /// The argument expression.
        argument: Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use calcrs::ast::Expr;
    ///
    /// let expr = Expr::Reference { name:     "ans".to_string(),
    ///                              position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Reference { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }

    /// Number of nodes on the longest path from `self` to a leaf.
    ///
    /// Recurses once per level, so only call it on trees whose children are
    /// already known to be shallow.
    /// ## Example
    /// ```
    /// use calcrs::ast::{Expr, UnaryOperator};
    ///
    /// let one = Expr::Literal { value:    1.0,
    ///                           position: 1, };
    /// let negated = Expr::UnaryOp { op:       UnaryOperator::Negate,
    ///                               expr:     Box::new(one),
    ///                               position: 0, };
    ///
    /// assert_eq!(negated.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Reference { .. } => 1,
            Self::UnaryOp { expr, .. } | Self::Call { argument: expr, .. } => 1 + expr.height(),
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus, the identity (e.g. `+x`).
    Plus,
    /// Degree unit marker (e.g. `x deg`); converts degrees to radians.
    Degrees,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Plus => "+",
            Self::Degrees => "deg",
        };
        write!(f, "{operator}")
    }
}
