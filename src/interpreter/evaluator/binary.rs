use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two evaluated operands.
///
/// Integer pairs get arithmetic and comparisons; string pairs get
/// concatenation and nothing else. Outside those, `==` and `!=` compare by
/// identity before anything else, so mixed-type equality is `false` rather
/// than an error; any other operator on mixed types is a type mismatch and
/// on matching types an unknown operator.
pub(in crate::interpreter::evaluator) fn eval_binary(op: BinaryOperator,
                                                     left: Value,
                                                     right: Value)
                                                     -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => eval_integer_binary(op, left, right),
        (Value::Str(left), Value::Str(right)) => eval_string_binary(op, &left, &right),
        (left, right) => match op {
            BinaryOperator::Equal => Ok(Value::Bool(left.identity_eq(&right))),
            BinaryOperator::NotEqual => Ok(Value::Bool(!left.identity_eq(&right))),
            op if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 op,
                                                 right: right.type_name() })
            },
            op => Err(RuntimeError::UnknownBinaryOperator { left: left.type_name(),
                                                            op,
                                                            right: right.type_name() }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic is checked: overflow is a runtime error, not a wrap.
/// Division truncates toward zero; dividing by zero is an error.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => {
            left.checked_add(right).map(Value::Integer)
                .ok_or_else(|| overflow(left, op, right))
        },
        BinaryOperator::Sub => {
            left.checked_sub(right).map(Value::Integer)
                .ok_or_else(|| overflow(left, op, right))
        },
        BinaryOperator::Mul => {
            left.checked_mul(right).map(Value::Integer)
                .ok_or_else(|| overflow(left, op, right))
        },
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right).map(Value::Integer)
                .ok_or_else(|| overflow(left, op, right))
        },
        BinaryOperator::Less => Ok(Value::Bool(left < right)),
        BinaryOperator::Greater => Ok(Value::Bool(left > right)),
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

/// String concatenation; every other operator on two strings is unknown.
fn eval_string_binary(op: BinaryOperator, left: &str, right: &str) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Str(Rc::from(format!("{left}{right}")))),
        op => Err(RuntimeError::UnknownBinaryOperator { left: "STRING",
                                                        op,
                                                        right: "STRING" }),
    }
}

fn overflow(left: i64, op: BinaryOperator, right: i64) -> RuntimeError {
    RuntimeError::IntegerOverflow { operation: format!("{left} {op} {right}") }
}
