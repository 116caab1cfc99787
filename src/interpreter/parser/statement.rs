use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// The only two real statement forms are `let` and `return`; anything
    /// else is parsed as an expression statement. The statement's source
    /// line is taken from its first token.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.current_is(&Token::Let) {
            return self.parse_let_statement();
        }
        if self.current_is(&Token::Return) {
            return self.parse_return_statement();
        }
        self.parse_expression_statement()
    }

    /// Parses `let <identifier> = <expression>` with an optional trailing
    /// semicolon.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();

        let name = self.expect_identifier()?;
        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>` with an optional trailing semicolon.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Ok(Statement::Return { value, line })
    }

    /// Parses an expression in statement position, with an optional
    /// trailing semicolon.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current_line();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Ok(Statement::Expression { expr, line })
    }
}
