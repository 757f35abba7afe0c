use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Span, Token},
        parser::core::{ParseResult, Parser, Subtree},
        registry::Operator,
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions are:
    /// - a parenthesized expression,
    /// - a prefix operator applied to its operand,
    /// - a number literal.
    ///
    /// Postfix operators are not handled here; callers absorb them with
    /// [`Parser::parse_postfix`].
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | prefixOp expression(precedence of prefixOp)
    ///              | number
    /// ```
    ///
    /// # Errors
    /// Returns a `SyntaxError` at end of input or when the current token is
    /// `)` or a non-prefix operator.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Subtree> {
        let Some((token, span)) = self.peek() else {
            return Err(self.end_of_input().into());
        };

        match token {
            Token::LParen => self.parse_grouping(),
            Token::Number(text) => self.parse_literal(text, span),
            Token::Operator(symbol) => {
                let op = self.lookup(*symbol)?;
                if op.is_prefix() {
                    self.parse_prefix(op, span)
                } else {
                    Err(SyntaxError::UnexpectedToken { token:    token.to_string(),
                                                       position: span.start, }.into())
                }
            },
            Token::RParen => Err(SyntaxError::UnexpectedToken { token:    token.to_string(),
                                                                position: span.start, }.into()),
        }
    }

    /// Wraps `node` in every postfix operator that immediately follows it.
    ///
    /// `5!!` becomes `Unary(!, Unary(!, 5))`. Absorbing postfix operators
    /// right after an operand is what lets `2 + 3!` bind `!` to `3` alone.
    pub(crate) fn parse_postfix(&mut self, (mut node, mut height): Subtree) -> ParseResult<Subtree> {
        while let Some((op, span)) = self.peek_postfix() {
            self.advance();
            height = self.check_height(height + 1)?;
            node = Expr::Unary { op,
                                 operand: Box::new(node),
                                 position: span.start };
        }
        Ok((node, height))
    }

    /// Parses a prefix operator and its operand.
    ///
    /// The operand is parsed with the operator's own precedence as the lower
    /// bound, so `~2 @ 3` is `(~2) @ 3` while `~5!` is `~(5!)`.
    fn parse_prefix(&mut self, op: Operator, span: &Span) -> ParseResult<Subtree> {
        self.advance();
        let (operand, height) = self.parse_expression(op.precedence)?;
        let height = self.check_height(height + 1)?;
        Ok((Expr::Unary { op,
                          operand: Box::new(operand),
                          position: span.start },
            height))
    }

    /// Parses `( expression )`.
    fn parse_grouping(&mut self) -> ParseResult<Subtree> {
        self.advance();
        let inner = self.parse_expression(0)?;
        match self.advance() {
            Some((Token::RParen, _)) => Ok(inner),
            Some((_, span)) => Err(SyntaxError::ExpectedClosingParen { position: span.start }.into()),
            None => Err(SyntaxError::ExpectedClosingParen { position: self.end() }.into()),
        }
    }

    /// Parses a number literal, which may carry a folded leading `-`.
    fn parse_literal(&mut self, text: &str, span: &Span) -> ParseResult<Subtree> {
        self.advance();
        let value = text.parse::<f64>()
                        .map_err(|_| SyntaxError::InvalidNumber { text:     text.to_string(),
                                                                  position: span.start, })?;
        Ok((Expr::Literal { value,
                            position: span.start },
            1))
    }
}
