use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions up to `closing`.
    ///
    /// Shared by call arguments and array literals. An immediately
    /// encountered closing token produces an empty list.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: &Token)
                                                                -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses a comma-separated parameter list up to `)`.
    ///
    /// Like [`parse_expression_list`](Self::parse_expression_list) but each
    /// element must be a plain identifier, which keeps non-identifier
    /// parameters out of function literals by construction.
    pub(in crate::interpreter::parser) fn parse_function_parameters(&mut self)
                                                                    -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(parameters)
    }
}
