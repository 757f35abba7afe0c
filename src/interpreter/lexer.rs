use std::{fmt, ops::Range};

use logos::Logos;

use crate::{error::TokenizationError, interpreter::registry::OperatorRegistry};

/// Byte range of a token in the source text.
pub type Span = Range<usize>;

/// A token paired with its position in the source.
pub type Spanned = (Token, Span);

/// Represents a lexical token in the source input.
///
/// Whitespace is skipped. A run of digits and dots is a number; its validity as
/// a literal is checked by the parser. Any other single character is accepted
/// as an operator only if the registry knows it.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal text, such as `42`, `3.14` or, after sign folding,
    /// `-5`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// A registered operator symbol.
    #[regex(r"[^0-9.()\s]", operator_symbol)]
    Operator(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Holds the operator symbols of the registry in use, so the lexer can reject
/// characters that merely look like operators.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// Symbols accepted as [`Token::Operator`].
    pub operators: Vec<char>,
}

/// Accepts the current single-character slice if it is a registered operator
/// symbol. Rejected characters surface as lexer errors.
fn operator_symbol(lex: &mut logos::Lexer<Token>) -> Option<char> {
    let ch = lex.slice().chars().next()?;
    lex.extras.operators.contains(&ch).then_some(ch)
}

/// Converts source text into a sequence of spanned tokens.
///
/// After scanning, a `-` in sign position is folded into the number literal
/// that follows it. Sign position is the beginning of the input, right after
/// `(`, and right after any operator symbol, postfix ones included. Everywhere
/// else it stays the subtraction operator. This is what makes `~-5` read as `~`
/// applied to the literal `-5`. It also means `5!-3` lexes as `5`, `!`, `-3`.
///
/// # Errors
/// Returns [`TokenizationError::UnrecognizedCharacter`] for the first
/// character that is neither a digit, `.`, a parenthesis, whitespace, nor a
/// registered operator.
///
/// # Example
/// ```
/// use fixity::interpreter::{
///     lexer::{Token, tokenize},
///     registry::OperatorRegistry,
/// };
///
/// let registry = OperatorRegistry::standard().unwrap();
/// let tokens: Vec<Token> = tokenize("~-5 - 2", &registry).unwrap()
///                                                      .into_iter()
///                                                      .map(|(token, _)| token)
///                                                      .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Operator('~'),
///                 Token::Number("-5".to_string()),
///                 Token::Operator('-'),
///                 Token::Number("2".to_string())]);
/// ```
pub fn tokenize(source: &str, registry: &OperatorRegistry) -> Result<Vec<Spanned>, TokenizationError> {
    let extras = LexerExtras { operators: registry.symbols() };
    let mut lexer = Token::lexer_with_extras(source, extras);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(TokenizationError::UnrecognizedCharacter { character,
                                                                      position: span.start, });
            },
        }
    }

    Ok(fold_signs(tokens))
}

/// Merges a sign-position `-` with the number immediately after it.
fn fold_signs(tokens: Vec<Spanned>) -> Vec<Spanned> {
    let mut folded: Vec<Spanned> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some((token, span)) = iter.next() {
        if token == Token::Operator('-')
           && is_sign_position(folded.last())
           && let Some((Token::Number(digits), number_span)) =
               iter.next_if(|(next, _)| matches!(next, Token::Number(_)))
        {
            folded.push((Token::Number(format!("-{digits}")), span.start..number_span.end));
            continue;
        }
        folded.push((token, span));
    }

    folded
}

/// Returns `true` if a `-` following `previous` is a literal sign.
const fn is_sign_position(previous: Option<&Spanned>) -> bool {
    matches!(previous, None | Some((Token::LParen | Token::Operator(_), _)))
}
