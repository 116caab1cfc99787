use std::{io::Write, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::{FunctionValue, Value},
    },
};

impl<W: Write> Evaluator<'_, W> {
    /// Applies an evaluated callee to its evaluated arguments.
    ///
    /// User functions are checked for arity and run in a fresh scope;
    /// builtins run natively; anything else is not callable.
    pub(in crate::interpreter::evaluator) fn apply_function(&mut self,
                                                            function: Value,
                                                            arguments: Vec<Value>)
                                                            -> EvalResult<Value> {
        match function {
            Value::Function(function) => self.apply_user_function(&function, arguments),
            Value::Builtin(builtin) => builtin.call(&mut *self.output(), arguments),
            other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
        }
    }

    /// Runs a user function's body.
    ///
    /// The call scope encloses the function's *captured* environment, not
    /// the caller's; that single choice is what makes closures lexical.
    /// Parameters bind positionally after an exact arity check. A `return`
    /// from the body is unwrapped here so it only ever terminates this
    /// call, never a calling function's block.
    fn apply_user_function(&mut self,
                           function: &FunctionValue,
                           arguments: Vec<Value>)
                           -> EvalResult<Value> {
        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::WrongCallArity { got:  arguments.len(),
                                                      want: function.parameters.len(), });
        }

        let env = Environment::new_enclosed(Rc::clone(&function.env));
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            env.set(parameter.clone(), argument);
        }

        match self.eval_block(&function.body, &env)? {
            Some(Value::Return(value)) => Ok(*value),
            Some(value) => Ok(value),
            None => Ok(Value::Null),
        }
    }
}
