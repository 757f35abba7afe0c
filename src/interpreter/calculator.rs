use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::{Evaluator, MAX_NESTING_DEPTH, MAX_NESTING_LIMIT},
        lexer::{Spanned, tokenize},
        parser::core::parse,
        registry::OperatorRegistry,
    },
};

/// Evaluates expression strings against one operator registry.
///
/// A `Calculator` runs the tokenizer, the parser and the evaluator in turn.
/// It keeps no state between calls, so one instance can serve any number of
/// threads through a shared reference.
///
/// ## Usage
///
/// ```
/// use fixity::Calculator;
///
/// let calculator = Calculator::new().unwrap();
/// assert_eq!(calculator.evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calculator.evaluate("(2 + 3!) * 4").unwrap(), 32.0);
/// assert_eq!(calculator.evaluate("~-5").unwrap(), 5.0);
/// assert!(calculator.evaluate("1 / 0").unwrap_err().is_domain());
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    registry:  OperatorRegistry,
    max_depth: usize,
}

impl Calculator {
    /// Creates a calculator over the standard operator table with the default
    /// nesting limit.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the standard table is inconsistent.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_registry(OperatorRegistry::standard()?))
    }

    /// Creates a calculator over a prebuilt registry.
    #[must_use]
    pub const fn with_registry(registry: OperatorRegistry) -> Self {
        Self { registry,
               max_depth: MAX_NESTING_DEPTH }
    }

    /// Sets the nesting limit used by both the parser and the evaluator.
    ///
    /// Limits above [`MAX_NESTING_LIMIT`] are lowered to it.
    ///
    /// # Example
    /// ```
    /// use fixity::{
    ///     Calculator, error::SyntaxError, interpreter::evaluator::core::MAX_NESTING_LIMIT,
    /// };
    ///
    /// let calculator = Calculator::new().unwrap().with_max_depth(4);
    /// assert!(calculator.evaluate("((1))").is_ok());
    /// assert_eq!(calculator.evaluate("((((1))))").unwrap_err(),
    ///            SyntaxError::NestingTooDeep { limit: 4 }.into());
    ///
    /// let generous = Calculator::new().unwrap().with_max_depth(usize::MAX);
    /// assert_eq!(generous.max_depth(), MAX_NESTING_LIMIT);
    /// ```
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth > MAX_NESTING_LIMIT { MAX_NESTING_LIMIT } else { max_depth };
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Converts `source` into spanned tokens.
    ///
    /// # Errors
    /// Returns [`Error::Tokenization`] on an unrecognized character.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Spanned>, Error> {
        Ok(tokenize(source, &self.registry)?)
    }

    /// Tokenizes and parses `source` into an expression tree.
    ///
    /// # Errors
    /// Returns the first tokenization or syntax error encountered.
    pub fn parse(&self, source: &str) -> Result<Expr, Error> {
        let tokens = self.tokenize(source)?;
        tracing::trace!(count = tokens.len(), "tokenized");
        parse(&tokens, &self.registry, self.max_depth)
    }

    /// Evaluates `source` and returns its value.
    ///
    /// Errors from each stage are passed through unchanged, so callers can
    /// tell lexical, syntactic and domain failures apart.
    ///
    /// # Errors
    /// - [`Error::Tokenization`] for unrecognized characters.
    /// - [`Error::Syntax`] for malformed or overly nested expressions.
    /// - [`Error::Domain`] for operator precondition failures such as division
    ///   by zero.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn evaluate(&self, source: &str) -> Result<f64, Error> {
        let expr = self.parse(source)?;
        let value = Evaluator::new(self.max_depth).evaluate(&expr)?;
        tracing::debug!(%expr, value, "evaluated");
        Ok(value)
    }
}
