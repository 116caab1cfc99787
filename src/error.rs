/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an
/// abstract syntax tree: unexpected tokens, tokens that cannot start an
/// expression, invalid literals, and premature end of input. Each error
/// carries the source line it was detected on.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors that can be raised during evaluation: type
/// mismatches, unknown operators, unresolved identifiers, bad call arities,
/// index and hash-key misuse, division by zero, and integer overflow. Their
/// rendered messages are part of the language's contract.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Either kind of failure the one-shot interpretation entry point can hit.
///
/// Parsing reports every error it found; evaluation stops at the first.
pub enum Error {
    /// The source failed to parse; the program was not evaluated.
    Parse(Vec<ParseError>),
    /// The program parsed but evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(_) => None,
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
