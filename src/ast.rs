use std::fmt;

use crate::interpreter::registry::Operator;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built bottom-up by the parser and is immutable once
/// constructed. Operator nodes carry a copy of the registry entry they were
/// parsed from, so evaluation needs no further lookups. Every node records the
/// byte offset of the token that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// A prefix or postfix operator applied to one operand.
    Unary {
        /// The unary operator to apply.
        op:       Operator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// An infix operator applied to two operands.
    Binary {
        /// The operator.
        op:       Operator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Byte offset of the token that produced this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Unary { position, .. }
            | Self::Binary { position, .. } => *position,
        }
    }
}

/// Renders the tree fully parenthesized, so grouping is explicit.
///
/// # Example
/// ```
/// use fixity::Calculator;
///
/// let calculator = Calculator::new().unwrap();
/// let expr = calculator.parse("2 + 3! * ~4").unwrap();
/// assert_eq!(expr.to_string(), "(2 + ((3!) * (~4)))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Unary { op, operand, .. } => {
                if op.is_postfix() {
                    write!(f, "({operand}{op})")
                } else {
                    write!(f, "({op}{operand})")
                }
            },
            Self::Binary { op, left, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
