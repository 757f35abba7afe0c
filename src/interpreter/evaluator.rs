/// Binary operator functions.
///
/// Addition, subtraction, multiplication, division, power, modulo, maximum,
/// minimum and average over `f64`.
pub mod binary;

/// Unary operator functions.
///
/// Arithmetic negation and the factorial with its gamma extension.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree-walking evaluator, its depth limit and error propagation.
pub mod core;

/// Numeric helpers for the operator functions.
///
/// Exact integral factorial and the Lanczos gamma function.
pub mod utils;
