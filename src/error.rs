/// Errors raised while building an operator table.
///
/// Duplicate or reserved symbols and operators whose fixity disagrees with
/// their arity. These are fatal at startup and never occur per evaluation.
pub mod configuration_error;
/// Evaluation errors.
///
/// Operator-specific preconditions violated while reducing a tree, such as
/// division by zero or the factorial of a negative number.
pub mod domain_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a tree from tokens:
/// premature end of input, missing parentheses, misplaced tokens, malformed
/// literals and excessive nesting.
pub mod syntax_error;
/// Scanning errors.
///
/// Raised when the source text contains a character the lexer does not
/// recognize.
pub mod tokenization_error;
/// Pre-validation errors.
///
/// Reasons reported by the whitelist and bracket-balance validators before the
/// engine sees an input.
pub mod validation_error;

pub use configuration_error::ConfigurationError;
pub use domain_error::DomainError;
pub use syntax_error::SyntaxError;
pub use tokenization_error::TokenizationError;
pub use validation_error::ValidationError;

/// Any error the engine can produce.
///
/// Each stage reports its own error type. This enum wraps them without
/// changing their message so callers can tell lexical, syntactic and domain
/// failures apart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The lexer met an unrecognized character.
    #[error(transparent)]
    Tokenization(#[from] TokenizationError),
    /// The token sequence is not a well-formed expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A symbol was lexed as an operator but is missing from the registry.
    #[error("Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The symbol that failed to resolve.
        symbol: char,
    },
    /// An operator rejected its operands.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The operator table is inconsistent.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl Error {
    /// Returns `true` for errors raised by the lexer.
    #[must_use]
    pub const fn is_tokenization(&self) -> bool {
        matches!(self, Self::Tokenization(_))
    }

    /// Returns `true` for errors raised by the parser, including nesting
    /// limits hit during evaluation.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` for operator precondition failures.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
