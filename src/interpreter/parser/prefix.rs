use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Converts an integer literal's text into its value.
///
/// The lexer keeps literals as text, so a literal too large for `i64`
/// surfaces here as a parse error instead of a lexer failure.
pub(in crate::interpreter::parser) fn parse_integer_literal(literal: &str,
                                                            line: usize)
                                                            -> ParseResult<Expr> {
    literal.parse::<i64>()
           .map(|value| Expr::IntegerLiteral { value, line })
           .map_err(|_| ParseError::InvalidIntegerLiteral { literal: literal.to_string(),
                                                            line })
}

impl Parser<'_> {
    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand binds at `Prefix` strength, so `-a * b` parses as
    /// `((-a) * b)`.
    pub(in crate::interpreter::parser) fn parse_unary_expression(&mut self,
                                                                 token: &Token,
                                                                 line: usize)
                                                                 -> ParseResult<Expr> {
        let op = match token {
            Token::Bang => UnaryOperator::Not,
            Token::Minus => UnaryOperator::Negate,
            other => unreachable!("token {other} is not a unary operator"),
        };

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Unary { op,
                         right: Box::new(right),
                         line })
    }

    /// Parses `(<expression>)`.
    ///
    /// Grouping needs no node of its own: the parenthesised expression is
    /// parsed from the lowest strength and returned as-is.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self)
                                                                   -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        Ok(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional
    /// `else { ... }`.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self,
                                                              line: usize)
                                                              -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&Token::Else) {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative,
                      line })
    }

    /// Parses `fn(<parameters>) { ... }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self,
                                                                 line: usize)
                                                                 -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block_statement();

        Ok(Expr::FunctionLiteral { parameters, body, line })
    }

    /// Parses `[<expressions>]`.
    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self,
                                                              line: usize)
                                                              -> ParseResult<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Ok(Expr::ArrayLiteral { elements, line })
    }

    /// Parses `{<expr> : <expr>, ...}`.
    ///
    /// Keys and values are arbitrary expressions; whether a key is actually
    /// hashable is the evaluator's business. The empty hash `{}` and a
    /// missing trailing comma are both fine.
    pub(in crate::interpreter::parser) fn parse_hash_literal(&mut self,
                                                             line: usize)
                                                             -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(&Token::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) {
                self.expect_peek(&Token::Comma)?;
            }
        }
        self.expect_peek(&Token::RBrace)?;

        Ok(Expr::HashLiteral { pairs, line })
    }
}
