use crate::{
    error::DomainError,
    interpreter::{
        evaluator::utils::{MAX_FACTORIAL_OPERAND, euler_gamma, integral_factorial},
        registry::OpResult,
    },
};

/// Factorial, extended to fractional operands through the gamma function.
///
/// Non-negative integral operands are multiplied out exactly. Fractional
/// operands use `Γ(x + 1)`. Negative operands have no factorial.
///
/// # Errors
/// - [`DomainError::NegativeFactorial`] if `x < 0`.
/// - [`DomainError::FactorialOverflow`] if the result is not finite.
///
/// # Example
/// ```
/// use fixity::{error::DomainError, interpreter::evaluator::unary::factorial};
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!((factorial(0.5).unwrap() - 0.886_226_925_452_758).abs() < 1e-12);
/// assert_eq!(factorial(-1.0), Err(DomainError::NegativeFactorial { operand: -1.0 }));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn factorial(x: f64) -> OpResult {
    if x < 0.0 {
        return Err(DomainError::NegativeFactorial { operand: x });
    }

    let result = if x.fract() == 0.0 && x <= MAX_FACTORIAL_OPERAND {
        integral_factorial(x as u64)
    } else {
        euler_gamma(x + 1.0)
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(DomainError::FactorialOverflow { operand: x })
    }
}

/// Arithmetic negation. Always succeeds.
#[allow(clippy::unnecessary_wraps)]
pub fn negate(x: f64) -> OpResult {
    Ok(-x)
}
