use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while scanning the source text.
pub enum TokenizationError {
    /// A character that is neither a digit, `.`, a parenthesis, whitespace, nor
    /// a registered operator symbol.
    #[error("Error at position {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
}
