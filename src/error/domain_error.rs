use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents operator preconditions violated during evaluation.
///
/// Domain errors are produced by the operator functions themselves, which are
/// pure and know nothing about source positions.
pub enum DomainError {
    /// Factorial applied to a negative operand.
    #[error("Factorial not defined for negative number {operand}.")]
    NegativeFactorial {
        /// The operand that was passed to `!`.
        operand: f64,
    },
    /// Factorial result is too large to be represented.
    #[error("Factorial of {operand} is too large to be represented.")]
    FactorialOverflow {
        /// The operand that was passed to `!`.
        operand: f64,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Attempted modulo by zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// Zero raised to a negative exponent.
    #[error("Cannot raise zero to the negative power {exponent}.")]
    ZeroToNegativePower {
        /// The exponent.
        exponent: f64,
    },
    /// A negative base raised to a fractional exponent has no real result.
    #[error("{base} ^ {exponent} has no real result.")]
    ComplexResult {
        /// The base.
        base:     f64,
        /// The exponent.
        exponent: f64,
    },
}
