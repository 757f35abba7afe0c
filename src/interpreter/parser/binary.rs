use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Subtree},
        registry::Operator,
    },
};

impl Parser<'_> {
    /// Parses an expression whose infix operators all bind at least as tightly
    /// as `min_precedence`.
    ///
    /// Starts from a primary with its postfix operators absorbed, then loops
    /// while the next token is an infix operator of sufficient precedence. The
    /// right operand is parsed with a bound of `precedence + 1` for
    /// left-associative operators and `precedence` for right-associative ones,
    /// so `8 - 4 - 2` groups as `(8 - 4) - 2`. Postfix operators are absorbed
    /// again after every binary node.
    ///
    /// Grammar:
    /// ```text
    ///     expression := term (infixOp term)*
    ///     term       := prefixOp? primary postfixOp*
    /// ```
    pub(crate) fn parse_expression(&mut self, min_precedence: u8) -> ParseResult<Subtree> {
        self.nested(|parser| parser.climb(min_precedence))
    }

    fn climb(&mut self, min_precedence: u8) -> ParseResult<Subtree> {
        let primary = self.parse_primary()?;
        let mut left = self.parse_postfix(primary)?;

        while let Some(op) = self.peek_infix(min_precedence)? {
            let position = self.advance().map_or(self.end(), |(_, span)| span.start);
            let (right, right_height) = self.parse_expression(op.right_binding_power())?;
            let (left_expr, left_height) = left;
            let height = self.check_height(1 + left_height.max(right_height))?;
            let node = Expr::Binary { op,
                                      left: Box::new(left_expr),
                                      right: Box::new(right),
                                      position };
            left = self.parse_postfix((node, height))?;
        }

        Ok(left)
    }

    /// Returns the infix operator at the front of the stream if it binds at
    /// least as tightly as `min_precedence`.
    fn peek_infix(&mut self, min_precedence: u8) -> ParseResult<Option<Operator>> {
        let Some((Token::Operator(symbol), _)) = self.peek() else {
            return Ok(None);
        };
        let op = self.lookup(*symbol)?;
        Ok((op.is_infix() && op.precedence >= min_precedence).then_some(op))
    }
}
