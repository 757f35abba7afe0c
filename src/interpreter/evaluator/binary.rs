//! Binary operator functions.
//!
//! Each function takes its operands left then right and either returns the
//! result or the [`DomainError`] describing why the operands are rejected.
#![allow(clippy::unnecessary_wraps)]

use crate::{error::DomainError, interpreter::registry::OpResult};

pub fn add(x: f64, y: f64) -> OpResult {
    Ok(x + y)
}

pub fn subtract(x: f64, y: f64) -> OpResult {
    Ok(x - y)
}

pub fn multiply(x: f64, y: f64) -> OpResult {
    Ok(x * y)
}

/// Division.
///
/// # Errors
/// Returns [`DomainError::DivisionByZero`] for a zero divisor of either sign.
/// Division never yields an infinite sentinel in place of an error.
///
/// # Example
/// ```
/// use fixity::{error::DomainError, interpreter::evaluator::binary::divide};
///
/// assert_eq!(divide(100.0, 10.0).unwrap(), 10.0);
/// assert_eq!(divide(1.0, -0.0), Err(DomainError::DivisionByZero));
/// ```
pub fn divide(x: f64, y: f64) -> OpResult {
    if y == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(x / y)
}

/// Floored modulo: the result carries the sign of the divisor.
///
/// # Errors
/// Returns [`DomainError::ModuloByZero`] for a zero divisor.
///
/// # Example
/// ```
/// use fixity::interpreter::evaluator::binary::modulo;
///
/// assert_eq!(modulo(7.0, 3.0).unwrap(), 1.0);
/// assert_eq!(modulo(-7.0, 3.0).unwrap(), 2.0);
/// assert_eq!(modulo(7.0, -3.0).unwrap(), -2.0);
/// ```
pub fn modulo(x: f64, y: f64) -> OpResult {
    if y == 0.0 {
        return Err(DomainError::ModuloByZero);
    }
    let r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        Ok(r + y)
    } else {
        Ok(r)
    }
}

/// Exponentiation over the reals.
///
/// # Errors
/// - [`DomainError::ZeroToNegativePower`] for `0 ^ y` with `y < 0`.
/// - [`DomainError::ComplexResult`] for a negative base with a fractional
///   exponent.
pub fn power(x: f64, y: f64) -> OpResult {
    if x == 0.0 && y < 0.0 {
        return Err(DomainError::ZeroToNegativePower { exponent: y });
    }
    if x < 0.0 && y.fract() != 0.0 && y.is_finite() {
        return Err(DomainError::ComplexResult { base:     x,
                                                exponent: y, });
    }
    Ok(x.powf(y))
}

pub fn max(x: f64, y: f64) -> OpResult {
    Ok(x.max(y))
}

pub fn min(x: f64, y: f64) -> OpResult {
    Ok(x.min(y))
}

/// Arithmetic mean of the two operands.
pub fn average(x: f64, y: f64) -> OpResult {
    Ok((x + y) / 2.0)
}
