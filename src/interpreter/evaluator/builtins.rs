use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Builtin, Value},
    },
};

/// Resolves a name against the fixed builtin table.
///
/// Builtins are consulted only after the scope chain fails, so a `let`
/// binding named `len` shadows the native one.
pub(crate) fn lookup(name: &str) -> Option<Builtin> {
    let builtin = match name {
        "len" => Builtin::new("len", len),
        "first" => Builtin::new("first", first),
        "last" => Builtin::new("last", last),
        "rest" => Builtin::new("rest", rest),
        "push" => Builtin::new("push", push),
        "puts" => Builtin::new("puts", puts),
        _ => return None,
    };
    Some(builtin)
}

/// Checks that a builtin received exactly `want` arguments.
fn check_arity(arguments: &[Value], want: usize) -> EvalResult<()> {
    if arguments.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: arguments.len(),
                                               want })
    }
}

/// `len(x)`: the length of a string in bytes, or of an array in elements.
fn len(_output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
    check_arity(&arguments, 1)?;

    match &arguments[0] {
        Value::Str(value) => Ok(Value::Integer(i64::try_from(value.len()).unwrap_or(i64::MAX))),
        Value::Array(elements) => {
            Ok(Value::Integer(i64::try_from(elements.len()).unwrap_or(i64::MAX)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                         type_name: other.type_name(), }),
    }
}

/// `first(a)`: the first element of an array, or `null` when it is empty.
fn first(_output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
    check_arity(&arguments, 1)?;

    match &arguments[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "first",
                                                           type_name: other.type_name(), }),
    }
}

/// `last(a)`: the last element of an array, or `null` when it is empty.
fn last(_output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
    check_arity(&arguments, 1)?;

    match &arguments[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "last",
                                                           type_name: other.type_name(), }),
    }
}

/// `rest(a)`: a new array of all but the first element, or `null` when the
/// array is empty.
fn rest(_output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
    check_arity(&arguments, 1)?;

    match &arguments[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::from(elements[1..].to_vec()))
            }
        },
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "rest",
                                                           type_name: other.type_name(), }),
    }
}

/// `push(a, v)`: a new array with `v` appended; arrays are immutable, so
/// the original is untouched.
fn push(_output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
    check_arity(&arguments, 2)?;

    match &arguments[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(arguments[1].clone());
            Ok(Value::from(elements))
        },
        other => Err(RuntimeError::ExpectedArrayArgument { builtin:   "push",
                                                           type_name: other.type_name(), }),
    }
}

/// `puts(...)`: writes each argument's display form on its own line and
/// produces `null`.
fn puts(output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
    for value in &arguments {
        writeln!(output, "{value}")?;
    }
    Ok(Value::Null)
}
