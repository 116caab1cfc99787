use std::{collections::HashMap, fmt, io::Write, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{environment::Environment, evaluator::core::EvalResult,
                  value::hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a running program can produce and
/// consume. Aggregates share their storage through `Rc`, so cloning a value
/// is always cheap and the language's values stay immutable.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, `true` or `false`.
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value; the result of an `if` without a taken branch
    /// and of several builtins.
    Null,
    /// Wraps the value of a `return` statement while it travels up through
    /// enclosing blocks. Unwrapped exactly once, at the program top level or
    /// at the boundary of the function call that produced it.
    Return(Box<Self>),
    /// A function bundled with the environment it was defined in.
    Function(Rc<FunctionValue>),
    /// A native function from the fixed builtin table.
    Builtin(Builtin),
    /// An immutable array of values.
    Array(Rc<Vec<Self>>),
    /// An immutable map from hashable keys to values.
    Hash(Rc<HashMap<HashKey, Self>>),
}

/// A function value: parameters, body, and the captured environment.
///
/// Carrying the defining environment is what makes closures lexical: a call
/// evaluates the body in a fresh scope enclosing `env`, not the caller's
/// scope.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, bound positionally on every call.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment captured at the definition site.
    pub env:        Rc<Environment>,
}

// The captured environment may transitively contain this very function
// (`let f = fn(x) { f(x) };`), so Debug must not descend into it.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// The signature shared by all native builtin functions.
///
/// Builtins receive the evaluator's output sink so that `puts` writes where
/// the embedder decides, and they return values or runtime errors like any
/// other evaluation.
pub type BuiltinFunction = fn(&mut dyn Write, Vec<Value>) -> EvalResult<Value>;

/// A named native function.
#[derive(Clone, Copy)]
pub struct Builtin {
    name:     &'static str,
    function: BuiltinFunction,
}

impl Builtin {
    /// Pairs a builtin name with its native implementation.
    #[must_use]
    pub(crate) const fn new(name: &'static str, function: BuiltinFunction) -> Self {
        Self { name, function }
    }

    /// The name the builtin is resolved under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the native implementation.
    pub fn call(&self, output: &mut dyn Write, arguments: Vec<Value>) -> EvalResult<Value> {
        (self.function)(output, arguments)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Value {
    /// The type name used in runtime error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Only `null` and `false` are falsy; everything else, including `0`
    /// and the empty string, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) => false,
            _ => true,
        }
    }

    /// The hash key for this value, for the three hashable types.
    ///
    /// Returns `None` for every other type; callers turn that into the
    /// `unusable as hash key` error.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::Integer(*value)),
            Self::Bool(value) => Some(HashKey::Bool(*value)),
            Self::Str(value) => Some(HashKey::Str(Rc::clone(value))),
            _ => None,
        }
    }

    /// Compares two values the way the `==` operator does outside the
    /// integer/integer and string/string cases: booleans and `null` by
    /// value, aggregates and functions by reference, mixed types unequal.
    #[must_use]
    pub(crate) fn identity_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Str(left), Self::Str(right)) => Rc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left == right,
            _ => false,
        }
    }
}

// Structural equality, for tests and embedders. The `==` operator of the
// language itself goes through `identity_eq` instead. Functions still
// compare by reference: descending into a captured environment could
// recurse through a self-referential closure.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Return(left), Self::Return(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Hash(left), Self::Hash(right)) => left == right,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{ {} }}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, "}}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, rc::Rc};

    use super::Value;

    #[test]
    fn display_forms_match_the_repl_contract() {
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("Hello World!").to_string(), "Hello World!");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec![Value::Integer(1), Value::Integer(2)]).to_string(),
                   "[1, 2]");
    }

    #[test]
    fn hash_display_renders_pairs() {
        let mut pairs = HashMap::new();
        pairs.insert(Value::from("one").hash_key().unwrap(), Value::Integer(1));
        assert_eq!(Value::Hash(Rc::new(pairs)).to_string(), "{one: 1}");
    }

    #[test]
    fn truthiness_table() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn identity_comparison_is_by_reference_for_aggregates() {
        let array = Value::from(vec![Value::Integer(1)]);
        assert!(array.identity_eq(&array.clone()));
        assert!(!array.identity_eq(&Value::from(vec![Value::Integer(1)])));
        assert!(Value::Integer(3).identity_eq(&Value::Integer(3)));
        assert!(!Value::Integer(3).identity_eq(&Value::Bool(true)));
    }
}
