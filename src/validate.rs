//! Pre-validators run before the engine sees an input.
//!
//! The engine performs its own structural checks, so these are optional. They
//! exist to reject gross lexical garbage early with a plain reason string,
//! which is what the command-line front end shows to the user.

use crate::{error::ValidationError, interpreter::registry::OperatorRegistry};

/// Checks that every character belongs to the recognized symbol set: digits,
/// `.`, whitespace, parentheses and registered operator symbols.
///
/// # Errors
/// Returns [`ValidationError::UnrecognizedCharacter`] for the first character
/// outside the set.
///
/// # Example
/// ```
/// use fixity::{
///     error::ValidationError, interpreter::registry::OperatorRegistry, validate::check_characters,
/// };
///
/// let registry = OperatorRegistry::standard().unwrap();
/// assert!(check_characters("2 @ (3 $ 4)!", &registry).is_ok());
/// assert_eq!(check_characters("2 # 3", &registry),
///            Err(ValidationError::UnrecognizedCharacter { character: '#',
///                                                         position:  2, }));
/// ```
pub fn check_characters(input: &str, registry: &OperatorRegistry) -> Result<(), ValidationError> {
    let rejected = input.char_indices().find(|&(_, ch)| {
                                           !(ch.is_ascii_digit()
                                             || ch.is_whitespace()
                                             || matches!(ch, '.' | '(' | ')')
                                             || registry.is_operator_char(ch))
                                       });

    match rejected {
        Some((position, character)) => {
            Err(ValidationError::UnrecognizedCharacter { character, position })
        },
        None => Ok(()),
    }
}

/// Checks that parentheses are balanced: the running depth never goes negative
/// and ends at zero.
///
/// # Errors
/// - [`ValidationError::UnbalancedClose`] for a `)` without a matching `(`.
/// - [`ValidationError::UnclosedParen`] if some `(` are never closed.
///
/// # Example
/// ```
/// use fixity::{error::ValidationError, validate::check_brackets};
///
/// assert!(check_brackets("((1) + (2))").is_ok());
/// assert_eq!(check_brackets("(1))"), Err(ValidationError::UnbalancedClose { position: 3 }));
/// assert_eq!(check_brackets("((1)"), Err(ValidationError::UnclosedParen { open: 1 }));
/// ```
pub fn check_brackets(input: &str) -> Result<(), ValidationError> {
    let mut open = 0usize;

    for (position, ch) in input.char_indices() {
        match ch {
            '(' => open += 1,
            ')' => {
                open = open.checked_sub(1)
                           .ok_or(ValidationError::UnbalancedClose { position })?;
            },
            _ => {},
        }
    }

    if open == 0 {
        Ok(())
    } else {
        Err(ValidationError::UnclosedParen { open })
    }
}

/// Runs [`check_characters`] and then [`check_brackets`].
///
/// # Errors
/// Returns the first [`ValidationError`] found.
pub fn validate(input: &str, registry: &OperatorRegistry) -> Result<(), ValidationError> {
    check_characters(input, registry)?;
    check_brackets(input)
}
