use std::collections::HashMap;

use crate::{
    error::ConfigurationError,
    interpreter::{
        evaluator::{binary, unary},
        registry::operator::{Associativity, Fixity, Operator, OperatorFn, OperatorKind},
    },
};

/// Immutable table of the operators understood by the tokenizer, parser and
/// evaluator.
///
/// The registry is built once, validated at construction and never mutated
/// afterwards. It holds only plain data and function pointers, so a single
/// instance can be shared by any number of concurrent evaluations.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    operators: HashMap<char, Operator>,
}

const fn entry(kind: OperatorKind,
               symbol: char,
               precedence: u8,
               fixity: Fixity,
               associativity: Associativity,
               function: OperatorFn)
               -> Operator {
    Operator { kind,
               symbol,
               precedence,
               fixity,
               associativity,
               function }
}

/// The standard operator table.
pub const STANDARD_OPERATORS: [Operator; 11] = {
    use Associativity::{Left, Right};
    use Fixity::{Infix, Postfix, Prefix};
    use OperatorFn::{Binary, Unary};
    use OperatorKind as K;

    [entry(K::Factorial, '!', 7, Postfix, Right, Unary(unary::factorial)),
     entry(K::Negate, '~', 6, Prefix, Right, Unary(unary::negate)),
     entry(K::Max, '@', 5, Infix, Left, Binary(binary::max)),
     entry(K::Min, '&', 5, Infix, Left, Binary(binary::min)),
     entry(K::Average, '$', 5, Infix, Left, Binary(binary::average)),
     entry(K::Modulo, '%', 4, Infix, Left, Binary(binary::modulo)),
     entry(K::Power, '^', 3, Infix, Left, Binary(binary::power)),
     entry(K::Multiply, '*', 2, Infix, Left, Binary(binary::multiply)),
     entry(K::Divide, '/', 2, Infix, Left, Binary(binary::divide)),
     entry(K::Add, '+', 1, Infix, Left, Binary(binary::add)),
     entry(K::Subtract, '-', 1, Infix, Left, Binary(binary::subtract))]
};

impl OperatorRegistry {
    /// Builds the registry holding the standard operator table.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if the standard table is inconsistent.
    ///
    /// # Example
    /// ```
    /// use fixity::interpreter::registry::OperatorRegistry;
    ///
    /// let registry = OperatorRegistry::standard().unwrap();
    /// assert_eq!(registry.len(), 11);
    /// assert!(registry.is_operator_char('~'));
    /// assert!(!registry.is_operator_char('#'));
    /// ```
    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::from_operators(STANDARD_OPERATORS)
    }

    /// Builds a registry from an arbitrary set of operators.
    ///
    /// Every symbol must be unique and must not be a digit, `.`, a parenthesis
    /// or whitespace. Unary functions must be prefix or postfix and binary
    /// functions must be infix.
    ///
    /// # Errors
    /// - [`ConfigurationError::DuplicateSymbol`] if two operators share a
    ///   symbol.
    /// - [`ConfigurationError::ReservedSymbol`] if a symbol collides with the
    ///   number or grouping syntax.
    /// - [`ConfigurationError::FixityMismatch`] if fixity and arity disagree.
    ///
    /// # Example
    /// ```
    /// use fixity::{
    ///     error::ConfigurationError,
    ///     interpreter::registry::{OperatorRegistry, STANDARD_OPERATORS},
    /// };
    ///
    /// let mut operators = STANDARD_OPERATORS.to_vec();
    /// operators.push(STANDARD_OPERATORS[0]);
    ///
    /// let err = OperatorRegistry::from_operators(operators).unwrap_err();
    /// assert_eq!(err, ConfigurationError::DuplicateSymbol { symbol: '!' });
    /// ```
    pub fn from_operators<I>(operators: I) -> Result<Self, ConfigurationError>
        where I: IntoIterator<Item = Operator>
    {
        let mut table = HashMap::new();

        for op in operators {
            if op.symbol.is_ascii_digit()
               || op.symbol.is_whitespace()
               || matches!(op.symbol, '.' | '(' | ')')
            {
                return Err(ConfigurationError::ReservedSymbol { symbol: op.symbol });
            }

            let consistent = match op.function {
                OperatorFn::Unary(_) => !op.is_infix(),
                OperatorFn::Binary(_) => op.is_infix(),
            };
            if !consistent {
                return Err(ConfigurationError::FixityMismatch { symbol: op.symbol,
                                                                arity:  op.arity(),
                                                                fixity: op.fixity.to_string(), });
            }

            if table.insert(op.symbol, op).is_some() {
                return Err(ConfigurationError::DuplicateSymbol { symbol: op.symbol });
            }
        }

        tracing::debug!(count = table.len(), "operator registry built");
        Ok(Self { operators: table })
    }

    /// Returns the operator registered under `symbol`.
    #[must_use]
    pub fn lookup(&self, symbol: char) -> Option<&Operator> {
        self.operators.get(&symbol)
    }

    /// Returns `true` if `ch` is a registered operator symbol.
    #[must_use]
    pub fn is_operator_char(&self, ch: char) -> bool {
        self.operators.contains_key(&ch)
    }

    /// Returns the operator registered under `symbol` if it is a postfix
    /// operator.
    #[must_use]
    pub fn postfix(&self, symbol: char) -> Option<&Operator> {
        self.lookup(symbol).filter(|op| op.is_postfix())
    }

    /// Returns the operator registered under `symbol` if it is a prefix
    /// operator.
    #[must_use]
    pub fn prefix(&self, symbol: char) -> Option<&Operator> {
        self.lookup(symbol).filter(|op| op.is_prefix())
    }

    /// Returns the operator registered under `symbol` if it is an infix
    /// operator.
    #[must_use]
    pub fn infix(&self, symbol: char) -> Option<&Operator> {
        self.lookup(symbol).filter(|op| op.is_infix())
    }

    /// All registered symbols, in no particular order.
    #[must_use]
    pub fn symbols(&self) -> Vec<char> {
        self.operators.keys().copied().collect()
    }

    /// Iterates over all registered operators, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
