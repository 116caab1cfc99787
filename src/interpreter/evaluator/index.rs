use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, hash_key::HashKey},
    },
};

/// Applies the index operator to evaluated operands.
///
/// Arrays take integer indices and answer `null` when the index is out of
/// bounds on either side; there is no negative-index wrapping. Hashes take
/// any hashable key and answer `null` for an absent one. Everything else
/// is an error named after the value being indexed.
pub(in crate::interpreter::evaluator) fn eval_index(left: &Value,
                                                    index: &Value)
                                                    -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            Ok(eval_array_index(elements, *position))
        },
        (Value::Hash(pairs), key) => eval_hash_index(pairs, key),
        _ => Err(RuntimeError::IndexNotSupported { type_name: left.type_name() }),
    }
}

fn eval_array_index(elements: &[Value], position: i64) -> Value {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position))
                             .cloned()
                             .unwrap_or(Value::Null)
}

fn eval_hash_index(pairs: &HashMap<HashKey, Value>, key: &Value) -> EvalResult<Value> {
    let key = key.hash_key()
                 .ok_or_else(|| RuntimeError::UnusableAsHashKey { type_name: key.type_name() })?;
    Ok(pairs.get(&key).cloned().unwrap_or(Value::Null))
}

impl<W: Write> Evaluator<'_, W> {
    /// Evaluates a hash literal into a hash value.
    ///
    /// Each key is evaluated, checked for hashability, and then its value
    /// is evaluated, in source order; the first error wins. A repeated key
    /// keeps the value written last.
    pub(in crate::interpreter::evaluator) fn eval_hash_literal(&mut self,
                                                               pairs: &[(Expr, Expr)],
                                                               env: &Rc<Environment>)
                                                               -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval(key_expr, env)?;
            let key = key.hash_key().ok_or_else(|| {
                                        RuntimeError::UnusableAsHashKey { type_name:
                                                                              key.type_name(), }
                                    })?;
            let value = self.eval(value_expr, env)?;
            map.insert(key, value);
        }

        Ok(Value::Hash(Rc::new(map)))
    }
}
