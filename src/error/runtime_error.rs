use std::io;

use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error is an ordinary value of the language: whatever
/// evaluation receives one as an input yields it unchanged as its own
/// result, all the way out of the program. The rendered message is the
/// whole contract; runtime errors carry no source position.
pub enum RuntimeError {
    /// A binary operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A binary operator is not defined for its (matching) operand types.
    UnknownBinaryOperator {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A unary operator is not defined for its operand type.
    UnknownUnaryOperator {
        /// The operator.
        op:      UnaryOperator,
        /// Type name of the operand.
        operand: &'static str,
    },
    /// A name was resolved neither in any scope nor in the builtins.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// A call was applied to a value that is not callable.
    NotAFunction {
        /// Type name of the value in call position.
        type_name: &'static str,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many the builtin requires.
        want: usize,
    },
    /// A function was called with the wrong number of arguments.
    WrongCallArity {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many parameters the function declares.
        want: usize,
    },
    /// A builtin received an argument of a type it cannot work on.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// A builtin that only works on arrays received something else.
    ExpectedArrayArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// The index operator was applied to an unindexable value.
    IndexNotSupported {
        /// Type name of the value being indexed.
        type_name: &'static str,
    },
    /// A value that cannot serve as a hash key was used as one.
    UnusableAsHashKey {
        /// Type name of the offending key.
        type_name: &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed; arithmetic is checked, not wrapping.
    IntegerOverflow {
        /// Rendering of the overflowing operation.
        operation: String,
    },
    /// Writing program output failed.
    Io(io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },

            Self::UnknownBinaryOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },

            Self::UnknownUnaryOperator { op, operand } => {
                write!(f, "unknown operator: {op}{operand}")
            },

            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),

            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::WrongCallArity { got, want } => {
                write!(f, "wrong number of arguments: got {got}, want {want}")
            },

            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument to '{builtin}' not supported. Got {type_name}")
            },

            Self::ExpectedArrayArgument { builtin, type_name } => {
                write!(f, "argument to '{builtin}' must be ARRAY. Got {type_name}")
            },

            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },

            Self::UnusableAsHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::IntegerOverflow { operation } => write!(f, "integer overflow: {operation}"),

            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
