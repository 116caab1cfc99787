//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming
//! language: small, dynamically typed, and expression-oriented, with
//! first-class functions and closures, arrays, hashes, and a handful of
//! built-in functions.
//!
//! The pipeline is the classic one: a lexer turns source text into tokens,
//! a hybrid parser (recursive descent for statements, precedence climbing
//! for expressions) builds an abstract syntax tree, and an evaluator walks
//! that tree against lexically scoped environments.
//!
//! ```
//! use monkey::Environment;
//!
//! let env = Environment::new();
//! let mut output = Vec::new();
//! let result = monkey::interpret("let double = fn(x) { x * 2 }; double(21);",
//!                                &env,
//!                                &mut output).unwrap();
//!
//! assert_eq!(result.unwrap().to_string(), "42");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::Write, rc::Rc};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and walked by the evaluator; displaying a node
/// renders it fully parenthesised.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source line numbers to every node for diagnostics.
/// - Renders nodes back to canonical source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors carry line numbers and accumulate so a single run reports
/// everything it found. Runtime errors are in-band values of the language
/// whose rendered messages are part of its contract.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Implements the standard error traits for embedding.
/// - Aggregates both kinds behind the one-shot entry point's `Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together the lexer, parser, evaluator, environments, and value
/// types to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Exposes the embedding surface: lexing, parsing, and evaluation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

use crate::ast::Program;
pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{EvalResult, Evaluator},
        lexer::{Lexer, Token},
        parser::Parser,
        value::{core::Value, hash_key::HashKey},
    },
};

/// Parses `source` into a program, collecting every syntax error.
///
/// The program is returned even when errors were found, but it may then be
/// partial and must not be evaluated; callers decide what to do with the
/// error list.
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses and evaluates `source` in one step.
///
/// Program output (`puts`) goes to `output`; bindings persist in `env`, so
/// passing the same environment across calls gives REPL semantics. The
/// result is the value of the last value-producing statement, if any.
///
/// # Errors
/// Returns [`Error::Parse`] with every syntax error when parsing fails (the
/// program is then not evaluated at all), or [`Error::Runtime`] when
/// evaluation stops at a runtime error.
pub fn interpret<W: Write>(source: &str,
                           env: &Rc<Environment>,
                           output: &mut W)
                           -> Result<Option<Value>, Error> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    let mut evaluator = Evaluator::new(output);
    Ok(evaluator.eval_program(&program, env)?)
}
