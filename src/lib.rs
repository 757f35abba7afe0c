//! # fixity
//!
//! fixity evaluates arithmetic expressions written with a fixed set of custom
//! operators. Every operator has its own precedence, associativity and fixity:
//!
//! | symbol | precedence | fixity  | meaning        |
//! |--------|-----------:|---------|----------------|
//! | `!`    | 7          | postfix | factorial      |
//! | `~`    | 6          | prefix  | negation       |
//! | `@`    | 5          | infix   | maximum        |
//! | `&`    | 5          | infix   | minimum        |
//! | `$`    | 5          | infix   | average        |
//! | `%`    | 4          | infix   | modulo         |
//! | `^`    | 3          | infix   | exponentiation |
//! | `*`    | 2          | infix   | multiplication |
//! | `/`    | 2          | infix   | division       |
//! | `+`    | 1          | infix   | addition       |
//! | `-`    | 1          | infix   | subtraction    |
//!
//! All infix operators are left-associative. Source text flows one way through
//! the lexer, the precedence-climbing parser and the tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, the tree built by the parser and
/// walked by the evaluator. Each node records the source position of the token
/// that produced it.
pub mod ast;
/// Provides unified error types for every stage.
///
/// Each stage (lexer, parser, evaluator, registry construction, validators)
/// has its own error enum. The crate-wide [`Error`] wraps them without
/// altering their messages.
pub mod error;
/// Orchestrates the process of evaluating an expression.
///
/// This module ties together the operator registry, the lexer, the parser, the
/// evaluator and the calculator facade.
///
/// # Responsibilities
/// - Defines the operator table that drives parsing and evaluation.
/// - Converts text to tokens, tokens to trees and trees to numbers.
/// - Passes errors from each phase to the caller.
pub mod interpreter;
/// Optional input checks run before evaluation.
///
/// A character whitelist and a bracket-balance check, both iterative.
pub mod validate;

pub use error::Error;
pub use interpreter::calculator::Calculator;

/// Evaluates a single expression with the standard operator table.
///
/// This is a shorthand for building a [`Calculator`] and calling
/// [`Calculator::evaluate`]. Keep a `Calculator` around when evaluating many
/// expressions.
///
/// # Errors
/// Returns an error if tokenization, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use fixity::evaluate;
///
/// assert_eq!(evaluate("2! + 3! * 4").unwrap(), 26.0);
/// assert_eq!(evaluate("100 / (5 + 5)").unwrap(), 10.0);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Calculator::new()?.evaluate(source)
}
