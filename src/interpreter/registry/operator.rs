use std::fmt;

use crate::error::DomainError;

/// Result of applying an operator function.
pub type OpResult = Result<f64, DomainError>;

/// Identifies every operator the engine knows about.
///
/// The set is closed. A custom registry may spell an operator with another
/// symbol, but its kind still names the function it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `!`
    Factorial,
    /// `~`
    Negate,
    /// `@`
    Max,
    /// `&`
    Min,
    /// `$`
    Average,
    /// `%`
    Modulo,
    /// `^`
    Power,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Add,
    /// `-`
    Subtract,
}

/// Where a unary operator sits relative to its operand. Binary operators are
/// always infix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Before the operand, as in `~5`.
    Prefix,
    /// Between two operands, as in `2 + 3`.
    Infix,
    /// After the operand, as in `5!`.
    Postfix,
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Infix => write!(f, "infix"),
            Self::Postfix => write!(f, "postfix"),
        }
    }
}

/// Grouping direction of equal-precedence infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a op b op c` groups as `a op (b op c)`.
    Right,
}

/// The evaluation function carried by an operator. Its variant fixes the
/// operator's arity.
#[derive(Debug, Clone, Copy)]
pub enum OperatorFn {
    /// Takes one operand.
    Unary(fn(f64) -> OpResult),
    /// Takes two operands, left then right.
    Binary(fn(f64, f64) -> OpResult),
}

/// A single entry of the operator table.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// Which operator this is.
    pub kind:          OperatorKind,
    /// The one-character spelling.
    pub symbol:        char,
    /// Binding strength. Higher binds tighter.
    pub precedence:    u8,
    /// Placement relative to the operand(s).
    pub fixity:        Fixity,
    /// Grouping of equal-precedence infix chains.
    pub associativity: Associativity,
    /// The evaluation function.
    pub function:      OperatorFn,
}

impl Operator {
    /// Number of operands this operator consumes.
    ///
    /// # Example
    /// ```
    /// use fixity::interpreter::registry::OperatorRegistry;
    ///
    /// let registry = OperatorRegistry::standard().unwrap();
    /// assert_eq!(registry.lookup('!').unwrap().arity(), 1);
    /// assert_eq!(registry.lookup('$').unwrap().arity(), 2);
    /// ```
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.function {
            OperatorFn::Unary(_) => 1,
            OperatorFn::Binary(_) => 2,
        }
    }

    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.fixity == Fixity::Prefix
    }

    #[must_use]
    pub fn is_postfix(&self) -> bool {
        self.fixity == Fixity::Postfix
    }

    #[must_use]
    pub fn is_infix(&self) -> bool {
        self.fixity == Fixity::Infix
    }

    /// Minimum precedence used when parsing the right-hand operand of this
    /// infix operator.
    #[must_use]
    pub const fn right_binding_power(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence.saturating_add(1),
            Associativity::Right => self.precedence,
        }
    }

    /// Applies a unary operator, or returns `None` for a binary one.
    ///
    /// The inner result carries the operator's [`DomainError`] when the operand
    /// is outside its domain.
    pub fn apply_unary(&self, operand: f64) -> Option<OpResult> {
        match self.function {
            OperatorFn::Unary(f) => Some(f(operand)),
            OperatorFn::Binary(_) => None,
        }
    }

    /// Applies a binary operator, or returns `None` for a unary one.
    pub fn apply_binary(&self, left: f64, right: f64) -> Option<OpResult> {
        match self.function {
            OperatorFn::Binary(f) => Some(f(left, right)),
            OperatorFn::Unary(_) => None,
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
        && self.symbol == other.symbol
        && self.precedence == other.precedence
        && self.fixity == other.fixity
        && self.associativity == other.associativity
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
