#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens into an
/// abstract syntax tree.
///
/// Parse errors are collected into a list as the parser continues, so a
/// single run can report several of them. Each carries the source line it
/// was detected on.
pub enum ParseError {
    /// The parser required a specific token and found something else.
    UnexpectedToken {
        /// Rendering of the token that was required.
        expected: String,
        /// Rendering of the token that was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No rule can start an expression with the current token.
    NoPrefixFunction {
        /// Rendering of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f,
                       "Error on line {line}: expected next token to be {expected}, got {found} instead.")
            },

            Self::NoPrefixFunction { token, line } => {
                write!(f, "Error on line {line}: no prefix parse function for {token} found.")
            },

            Self::InvalidIntegerLiteral { literal, line } => {
                write!(f, "Error on line {line}: could not parse {literal} as integer.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
