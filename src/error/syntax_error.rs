use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum SyntaxError {
    /// Reached the end of input while an operand or operator was still
    /// required.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset where more input was expected.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the token found instead, or the end of input.
        position: usize,
    },
    /// Found a token that cannot begin a primary expression.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A number token could not be read as a floating-point literal, such as
    /// `1.2.3` or a lone `.`.
    #[error("Error at position {position}: Invalid number literal: {text}.")]
    InvalidNumber {
        /// The offending literal text.
        text:     String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingToken {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Expression too deeply nested: the limit is {limit} levels.")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
    },
}
