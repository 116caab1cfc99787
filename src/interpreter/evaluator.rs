/// Core evaluation logic.
///
/// Contains the evaluator itself and the program, block, statement, and
/// expression dispatch, including identifier resolution and error
/// propagation.
pub mod core;

/// Unary operator evaluation.
///
/// Implements logical NOT over truthiness and checked integer negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic, comparisons, string
/// concatenation, and the identity semantics of `==` and `!=`.
pub mod binary;

/// Index operator and hash literal evaluation.
///
/// Array indexing with out-of-bounds-as-null, hash lookup, and hash
/// construction with key hashability checks.
pub mod index;

/// Function application.
///
/// Calls user functions in a fresh scope enclosing their captured
/// environment, dispatches builtins, and unwraps returned values.
pub mod function;

/// The fixed table of native functions.
///
/// `len`, `first`, `last`, `rest`, `push`, and `puts`, resolved when an
/// identifier is found in no scope.
pub mod builtins;

#[cfg(test)]
mod tests;

pub use self::core::{EvalResult, Evaluator};
