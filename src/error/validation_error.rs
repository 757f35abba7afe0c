use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons an input is rejected by the pre-validators in
/// [`crate::validate`].
pub enum ValidationError {
    /// A character outside the recognized symbol set.
    #[error("Character '{character}' at position {position} is not allowed.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A `)` with no matching `(` before it.
    #[error("Closing parenthesis at position {position} has no matching '('.")]
    UnbalancedClose {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// Input ended with parentheses still open.
    #[error("{open} parenthesis(es) left unclosed.")]
    UnclosedParen {
        /// Number of `(` never closed.
        open: usize,
    },
}
