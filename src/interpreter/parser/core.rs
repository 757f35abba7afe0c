use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::{Error, SyntaxError},
    interpreter::{
        lexer::{Span, Spanned, Token},
        registry::{Operator, OperatorRegistry},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// A parsed subtree together with its height. A literal has height 1.
pub(crate) type Subtree = (Expr, usize);

/// Parses a full token sequence into an expression tree.
///
/// This is the entry point for parsing. It climbs from minimum precedence 0 and
/// then requires that every token has been consumed.
///
/// # Parameters
/// - `tokens`: Spanned tokens produced by the lexer.
/// - `registry`: Operator table used to classify operator tokens.
/// - `max_depth`: Deepest recursion the parser will enter.
///
/// # Errors
/// - [`SyntaxError::UnexpectedEndOfInput`] if an operand is missing, which
///   includes the empty input.
/// - [`SyntaxError::ExpectedClosingParen`] for an unmatched `(`.
/// - [`SyntaxError::UnexpectedToken`] for a token that cannot begin an
///   operand, such as an infix operator in operand position.
/// - [`SyntaxError::InvalidNumber`] for malformed literals such as `1.2.3`.
/// - [`SyntaxError::UnexpectedTrailingToken`] for leftovers after a complete
///   expression, such as a stray `)`.
/// - [`SyntaxError::NestingTooDeep`] when `max_depth` is exceeded.
/// - [`Error::UnknownOperator`] if an operator token is missing from the
///   registry.
///
/// # Example
/// ```
/// use fixity::interpreter::{
///     evaluator::core::MAX_NESTING_DEPTH, lexer::tokenize, parser::core::parse,
///     registry::OperatorRegistry,
/// };
///
/// let registry = OperatorRegistry::standard().unwrap();
/// let tokens = tokenize("8 - 4 - 2", &registry).unwrap();
/// let expr = parse(&tokens, &registry, MAX_NESTING_DEPTH).unwrap();
/// assert_eq!(expr.to_string(), "((8 - 4) - 2)");
/// ```
pub fn parse(tokens: &[Spanned], registry: &OperatorRegistry, max_depth: usize) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens, registry, max_depth);
    let (expr, _) = parser.parse_expression(0)?;

    if let Some((token, span)) = parser.tokens.next() {
        return Err(SyntaxError::UnexpectedTrailingToken { token:    token.to_string(),
                                                          position: span.start, }.into());
    }

    Ok(expr)
}

/// Precedence-climbing parser state.
///
/// The parsing rules live in the sibling modules: `binary` drives the climbing
/// loop over infix operators and `unary` handles primaries, prefix and postfix
/// operators.
pub struct Parser<'a> {
    pub(crate) tokens: Peekable<Iter<'a, Spanned>>,
    registry:          &'a OperatorRegistry,
    depth:             usize,
    max_depth:         usize,
    end:               usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Spanned], registry: &'a OperatorRegistry, max_depth: usize) -> Self {
        Self { tokens: tokens.iter().peekable(),
               registry,
               depth: 0,
               max_depth,
               end: tokens.last().map_or(0, |(_, span)| span.end) }
    }

    /// Returns the next token without consuming it.
    pub(crate) fn peek(&mut self) -> Option<&'a Spanned> {
        self.tokens.peek().copied()
    }

    /// Consumes the next token.
    pub(crate) fn advance(&mut self) -> Option<&'a Spanned> {
        self.tokens.next()
    }

    /// Resolves an operator token against the registry.
    pub(crate) fn lookup(&self, symbol: char) -> ParseResult<Operator> {
        self.registry
            .lookup(symbol)
            .copied()
            .ok_or(Error::UnknownOperator { symbol })
    }

    /// Returns the postfix operator at the front of the stream, if any.
    pub(crate) fn peek_postfix(&mut self) -> Option<(Operator, &'a Span)> {
        match self.peek()? {
            (Token::Operator(symbol), span) => self.registry.postfix(*symbol).map(|op| (*op, span)),
            _ => None,
        }
    }

    pub(crate) const fn end_of_input(&self) -> SyntaxError {
        SyntaxError::UnexpectedEndOfInput { position: self.end }
    }

    pub(crate) const fn end(&self) -> usize {
        self.end
    }

    /// Accepts a subtree height, failing once it exceeds the limit. This keeps
    /// long flat chains such as `1+1+1+…` from building trees deeper than the
    /// evaluator will walk.
    pub(crate) fn check_height(&self, height: usize) -> ParseResult<usize> {
        if height > self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit: self.max_depth }.into());
        }
        Ok(height)
    }

    /// Runs `f` one nesting level deeper, failing once the limit is reached.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit: self.max_depth }.into());
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
