/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each a meaningful unit such as an identifier, a literal, an operator, or
/// a delimiter. It never fails: bytes it does not recognize come out as
/// `Illegal` tokens for the parser to report.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with maximal munch.
/// - Classifies keyword literals against plain identifiers.
/// - Tracks line numbers for diagnostics, including across multi-line
///   strings.
pub mod lexer;

/// The parser module builds the abstract syntax tree from tokens.
///
/// Statements are parsed by recursive descent; expressions by a
/// precedence-climbing loop with per-token prefix and infix rules. Errors
/// are collected rather than thrown, so one run reports everything it can
/// find, and the resulting program may be partial.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Enforces operator precedence and left-associativity.
/// - Records syntax errors with their line numbers and keeps going.
pub mod parser;

/// The evaluator module executes AST nodes and computes values.
///
/// The evaluator walks the tree against an environment, applies operators
/// and functions, and carries runtime failures as in-band error results
/// that short-circuit every enclosing evaluation.
///
/// # Responsibilities
/// - Evaluates programs, blocks, statements, and expressions.
/// - Implements closures, builtins, and the return-wrapper protocol.
/// - Produces the runtime errors whose messages form the language
///   contract.
pub mod evaluator;

/// The environment module implements lexical scope.
///
/// An environment maps names to values and links to its enclosing scope;
/// lookup walks outward, definition stays local. Function calls build a
/// fresh environment enclosing the function's captured one.
pub mod environment;

/// The value module defines the runtime data types of the language.
///
/// Declares the `Value` enum with all variants a program can produce,
/// function and builtin representations, hash keys, display forms, type
/// names, and truthiness.
pub mod value;
