use crate::{
    ast::Expr,
    error::{Error, SyntaxError},
    interpreter::registry::Operator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Default bound on nesting depth, shared by the parser and the evaluator.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Highest nesting bound a [`Calculator`](crate::Calculator) accepts. Larger
/// requests are lowered to this value so recursion stays within a thread's
/// default stack.
pub const MAX_NESTING_LIMIT: usize = 512;

/// Reduces expression trees to numbers.
///
/// The evaluator is stateless apart from its depth limit. Children are
/// evaluated before their parent, left operand before right, and the first
/// error aborts the whole evaluation.
///
/// `max_depth` is taken as given. A limit far above [`MAX_NESTING_LIMIT`] lets
/// a deep enough tree overflow the stack.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    /// Deepest tree the evaluator will descend into.
    pub max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { max_depth: MAX_NESTING_DEPTH }
    }
}

impl Evaluator {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// # Errors
    /// - [`Error::Domain`] when an operator rejects its operands.
    /// - [`Error::Syntax`] with [`SyntaxError::NestingTooDeep`] when the tree
    ///   is deeper than `max_depth`. Long left-leaning chains such as
    ///   `1+1+1+…` count towards this depth.
    /// - [`Error::UnknownOperator`] if a node's operator has the wrong arity.
    ///
    /// # Example
    /// ```
    /// use fixity::{Calculator, interpreter::evaluator::core::Evaluator};
    ///
    /// let calculator = Calculator::new().unwrap();
    /// let tree = calculator.parse("(2 + 3!) * 4").unwrap();
    /// assert_eq!(Evaluator::default().evaluate(&tree).unwrap(), 32.0);
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        self.eval(expr, 1)
    }

    fn eval(&self, expr: &Expr, depth: usize) -> EvalResult<f64> {
        if depth > self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit: self.max_depth }.into());
        }

        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Unary { op, operand, .. } => {
                let value = self.eval(operand, depth + 1)?;
                Self::apply_unary(op, value)
            },
            Expr::Binary { op, left, right, .. } => {
                let left = self.eval(left, depth + 1)?;
                let right = self.eval(right, depth + 1)?;
                Self::apply_binary(op, left, right)
            },
        }
    }

    fn apply_unary(op: &Operator, value: f64) -> EvalResult<f64> {
        let result = op.apply_unary(value)
                       .ok_or(Error::UnknownOperator { symbol: op.symbol })?;
        Ok(result?)
    }

    fn apply_binary(op: &Operator, left: f64, right: f64) -> EvalResult<f64> {
        let result = op.apply_binary(left, right)
                       .ok_or(Error::UnknownOperator { symbol: op.symbol })?;
        Ok(result?)
    }
}
