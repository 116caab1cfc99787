use std::{fmt, rc::Rc};

/// The key of a hash entry.
///
/// Only integers, booleans, and strings can serve as hash keys; the
/// evaluator rejects every other type before one of these is constructed.
/// Keys compare and hash by content, so `"name"` written in two places
/// addresses the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Bool(bool),
    /// A string key.
    Str(Rc<str>),
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::value::core::Value;

    #[test]
    fn string_keys_with_equal_content_are_the_same_key() {
        let hello1 = Value::from("Hello World").hash_key().unwrap();
        let hello2 = Value::from("Hello World").hash_key().unwrap();
        let diff = Value::from("My name is johnny").hash_key().unwrap();

        assert_eq!(hello1, hello2);
        assert_ne!(hello1, diff);
    }

    #[test]
    fn only_integers_booleans_and_strings_are_hashable() {
        assert!(Value::Integer(1).hash_key().is_some());
        assert!(Value::Bool(true).hash_key().is_some());
        assert!(Value::from("key").hash_key().is_some());
        assert!(Value::Null.hash_key().is_none());
        assert!(Value::from(vec![Value::Integer(1)]).hash_key().is_none());
    }
}
