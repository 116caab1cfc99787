use crate::{
    ast::BlockStatement,
    interpreter::{lexer::Token, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a block statement; the current token must be the opening
    /// `{`.
    ///
    /// Statements are collected until the closing `}` or end of input. A
    /// statement that fails to parse is dropped and its error recorded, so
    /// the rest of the block still gets parsed.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let line = self.current_line();
        let mut statements = Vec::new();

        self.advance();
        while self.current().is_some() && !self.current_is(&Token::RBrace) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        BlockStatement { statements, line }
    }
}
