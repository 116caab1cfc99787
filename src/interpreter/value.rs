/// Core value types.
///
/// Defines the `Value` enum, the closure-carrying `FunctionValue`, the
/// native `Builtin`, display forms, type names, truthiness, and the two
/// equality relations (structural for embedders, identity for the `==`
/// operator).
pub mod core;

/// Hash key representation.
///
/// Defines the `HashKey` type for the three hashable value types, with
/// content-based equality and hashing.
pub mod hash_key;
