use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents an inconsistent operator table detected while building an
/// [`OperatorRegistry`](crate::interpreter::registry::OperatorRegistry).
///
/// These are raised once at construction and never by an evaluation call.
pub enum ConfigurationError {
    /// Two operators were registered under the same symbol.
    #[error("Operator symbol '{symbol}' is registered more than once.")]
    DuplicateSymbol {
        /// The duplicated symbol.
        symbol: char,
    },
    /// A symbol collides with a digit, `.`, a parenthesis or whitespace.
    #[error("Character '{symbol}' is reserved and cannot be used as an operator symbol.")]
    ReservedSymbol {
        /// The reserved character.
        symbol: char,
    },
    /// A unary function was marked infix, or a binary function was marked
    /// prefix or postfix.
    #[error("Operator '{symbol}' has arity {arity} but is declared {fixity}.")]
    FixityMismatch {
        /// The operator symbol.
        symbol: char,
        /// Arity implied by the operator function.
        arity:  usize,
        /// Declared fixity, as text.
        fixity: String,
    },
}
