use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a unary operator to an evaluated operand.
///
/// `!` negates truthiness and always yields a boolean; `-` negates
/// integers and rejects every other type.
pub(in crate::interpreter::evaluator) fn eval_unary(op: UnaryOperator,
                                                    right: Value)
                                                    -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        UnaryOperator::Negate => eval_negate(right),
    }
}

fn eval_negate(right: Value) -> EvalResult<Value> {
    match right {
        Value::Integer(value) => value.checked_neg().map(Value::Integer).ok_or_else(|| {
                                     RuntimeError::IntegerOverflow { operation:
                                                                         format!("-{value}"), }
                                 }),
        other => Err(RuntimeError::UnknownUnaryOperator { op:      UnaryOperator::Negate,
                                                          operand: other.type_name(), }),
    }
}
