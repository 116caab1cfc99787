use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Identifier tokens; binding or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    ///
    /// The literal is kept as text; the parser converts it so that oversized
    /// literals surface as parse errors rather than lexer failures.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens, such as `"foo bar"`.
    ///
    /// The literal excludes the surrounding quotes and no escape sequences
    /// are processed. An unterminated string runs to the end of the input.
    #[regex(r#""[^"]*""#, terminated_string)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Any byte no other rule recognizes. Lexing never fails; the parser
    /// reports the syntax error when it runs into one of these.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Illegal(String),
    /// Newlines are skipped like other whitespace but advance the line
    /// counter used for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed, including newlines inside string
/// literals.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Extracts the contents of a terminated string literal.
///
/// Strips the delimiting quotes and accounts for any newlines the literal
/// spans so that later tokens report correct line numbers.
fn terminated_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let literal = &slice[1..slice.len() - 1];
    lex.extras.line += literal.chars().filter(|&c| c == '\n').count();
    literal.to_string()
}

/// Extracts the contents of an unterminated string literal.
///
/// Only the opening quote is stripped; the literal runs to the end of the
/// input.
fn unterminated_string(lex: &mut logos::Lexer<Token>) -> String {
    let literal = &lex.slice()[1..];
    lex.extras.line += literal.chars().filter(|&c| c == '\n').count();
    literal.to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Int(literal) => write!(f, "{literal}"),
            Self::Str(literal) => write!(f, "\"{literal}\""),
            Self::Illegal(literal) => write!(f, "{literal}"),
            Self::Function => write!(f, "fn"),
            Self::Let => write!(f, "let"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::Return => write!(f, "return"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Bang => write!(f, "!"),
            Self::Asterisk => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
            Self::Eq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Newline => write!(f, "\\n"),
        }
    }
}

/// A lazy stream of tokens over a source string.
///
/// Wraps the generated lexer and pairs every token with the line it starts
/// on. Unknown bytes come out as [`Token::Illegal`]; an exhausted stream
/// keeps returning `None`, which the parser treats as end of input.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`, starting at line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Returns the next token and the line it starts on, advancing the
    /// stream. Returns `None` once the input is exhausted, permanently.
    pub fn next_token(&mut self) -> Option<(Token, usize)> {
        match self.inner.next()? {
            Ok(token) => Some((token, self.inner.extras.line)),
            Err(()) => {
                Some((Token::Illegal(self.inner.slice().to_string()), self.inner.extras.line))
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
