use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses `<left> <operator> <right>`.
    ///
    /// The right-hand side is parsed at the operator's own strength, so a
    /// following operator of the same strength does not capture it; that is
    /// the left-associativity of `a + b + c` parsing as `((a + b) + c)`.
    pub(in crate::interpreter::parser) fn parse_binary_expression(&mut self,
                                                                  left: Expr,
                                                                  token: &Token,
                                                                  line: usize)
                                                                  -> ParseResult<Expr> {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            Token::Asterisk => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            Token::Eq => BinaryOperator::Equal,
            Token::NotEq => BinaryOperator::NotEqual,
            Token::Lt => BinaryOperator::Less,
            Token::Gt => BinaryOperator::Greater,
            other => unreachable!("token {other} is not a binary operator"),
        };

        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Binary { left: Box::new(left),
                          op,
                          right: Box::new(right),
                          line })
    }

    /// Parses `<callee>(<arguments>)`; the callee is whatever expression
    /// was already parsed to the left of the `(`.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expr,
                                                                line: usize)
                                                                -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;
        Ok(Expr::Call { function: Box::new(function),
                        arguments,
                        line })
    }

    /// Parses `<left>[<index>]`.
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self,
                                                                 left: Expr,
                                                                 line: usize)
                                                                 -> ParseResult<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RBracket)?;

        Ok(Expr::Index { left:  Box::new(left),
                         index: Box::new(index),
                         line })
    }
}
