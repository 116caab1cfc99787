use std::{io::Write, rc::Rc};

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, builtins, index, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator is the error
/// propagation rule of the language: whatever receives an error as an input
/// yields it unchanged as its own result.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the abstract syntax tree and computes values.
///
/// The evaluator owns nothing but its output sink, which is where `puts`
/// writes; all program state lives in the [`Environment`] passed alongside
/// every node. A single evaluator is single-threaded and runs every
/// program to completion or to its first error.
#[derive(Debug)]
pub struct Evaluator<'a, W: Write> {
    output: &'a mut W,
}

impl<'a, W: Write> Evaluator<'a, W> {
    /// Creates an evaluator writing program output to `output`.
    pub fn new(output: &'a mut W) -> Self {
        Self { output }
    }

    /// Evaluates a whole program against `env`.
    ///
    /// Statements run in order. A `return` at the top level unwraps to its
    /// inner value and stops the program. The result is the value of the
    /// last value-producing statement, or `None` when the program ends on a
    /// statement like `let` that produces nothing; the REPL prints nothing
    /// for `None`.
    pub fn eval_program(&mut self,
                        program: &Program,
                        env: &Rc<Environment>)
                        -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &program.statements {
            match self.eval_statement(statement, env)? {
                Some(Value::Return(value)) => return Ok(Some(*value)),
                other => result = other,
            }
        }
        Ok(result)
    }

    /// Evaluates the statements of a block.
    ///
    /// Unlike [`eval_program`](Self::eval_program), a `return` result is
    /// passed along still wrapped, so it keeps bubbling through enclosing
    /// blocks until the function call (or program) boundary unwraps it.
    pub(in crate::interpreter::evaluator) fn eval_block(&mut self,
                                                        block: &BlockStatement,
                                                        env: &Rc<Environment>)
                                                        -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in &block.statements {
            match self.eval_statement(statement, env)? {
                wrapper @ Some(Value::Return(_)) => return Ok(wrapper),
                other => result = other,
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` binds into the current scope and produces nothing; `return`
    /// wraps its value; an expression statement produces its value.
    fn eval_statement(&mut self,
                      statement: &Statement,
                      env: &Rc<Environment>)
                      -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => Ok(Some(self.eval(expr, env)?)),
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.set(name.clone(), value);
                Ok(None)
            },
            Statement::Return { value, .. } => {
                let value = self.eval(value, env)?;
                Ok(Some(Value::Return(Box::new(value))))
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main dispatch of the interpreter: literals map to their
    /// values, identifiers resolve through the scope chain and then the
    /// builtin table, operators and calls evaluate their operands left to
    /// right with errors short-circuiting, and a function literal captures
    /// the current environment to become a closure.
    pub(in crate::interpreter::evaluator) fn eval(&mut self,
                                                  expr: &Expr,
                                                  env: &Rc<Environment>)
                                                  -> EvalResult<Value> {
        match expr {
            Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Identifier { name, .. } => eval_identifier(name, env),
            Expr::Unary { op, right, .. } => {
                let right = self.eval(right, env)?;
                unary::eval_unary(*op, right)
            },
            Expr::Binary { left, op, right, .. } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                binary::eval_binary(*op, left, right)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                let condition = self.eval(condition, env)?;
                if condition.is_truthy() {
                    Ok(self.eval_block(consequence, env)?.unwrap_or(Value::Null))
                } else if let Some(alternative) = alternative {
                    Ok(self.eval_block(alternative, env)?.unwrap_or(Value::Null))
                } else {
                    Ok(Value::Null)
                }
            },
            Expr::FunctionLiteral { parameters, body, .. } => {
                Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                           body:       body.clone(),
                                                           env:        Rc::clone(env), })))
            },
            Expr::Call { function, arguments, .. } => {
                let function = self.eval(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(function, arguments)
            },
            Expr::ArrayLiteral { elements, .. } => {
                Ok(Value::from(self.eval_expressions(elements, env)?))
            },
            Expr::Index { left, index, .. } => {
                let left = self.eval(left, env)?;
                let index = self.eval(index, env)?;
                index::eval_index(&left, &index)
            },
            Expr::HashLiteral { pairs, .. } => self.eval_hash_literal(pairs, env),
        }
    }

    /// Evaluates a list of expressions left to right.
    ///
    /// The order is part of the language: a side effect of one argument may
    /// be relied on by the next, and the first error stops the rest from
    /// running at all.
    pub(in crate::interpreter::evaluator) fn eval_expressions(&mut self,
                                                              exprs: &[Expr],
                                                              env: &Rc<Environment>)
                                                              -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            values.push(self.eval(expr, env)?);
        }
        Ok(values)
    }

    /// Shared access to the output sink for builtin calls.
    pub(in crate::interpreter::evaluator) fn output(&mut self) -> &mut W {
        self.output
    }
}

/// Resolves an identifier through the scope chain, then the builtins.
fn eval_identifier(name: &str, env: &Rc<Environment>) -> EvalResult<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    builtins::lookup(name).map(Value::Builtin)
                          .ok_or_else(|| RuntimeError::IdentifierNotFound { name:
                                                                                name.to_string() })
}
