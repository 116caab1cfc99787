/// Core parsing machinery.
///
/// Contains the `Parser` itself, the precedence ladder, the expression
/// loop, and the prefix/infix dispatch tables as closed matches.
pub mod core;

/// Statement parsing.
///
/// Implements the three statement forms: `let`, `return`, and expressions
/// in statement position.
pub mod statement;

/// Block statement parsing.
///
/// Collects brace-delimited statement sequences for `if` branches and
/// function bodies, with per-statement error recovery.
pub mod block;

/// Prefix-position parse rules.
///
/// Everything that can start an expression: literals, identifiers, unary
/// operators, grouping, conditionals, function literals, and array and
/// hash literals.
pub mod prefix;

/// Infix-position parse rules.
///
/// Everything that can continue an expression: binary operators, call
/// argument lists, and index brackets.
pub mod infix;

/// Shared parsing helpers.
///
/// Comma-separated list parsing for arguments, elements, and parameters.
pub mod utils;


pub use self::core::{ParseResult, Parser, Precedence};
