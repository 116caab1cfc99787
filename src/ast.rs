use std::fmt;

/// A complete parsed program: a sequence of statements.
///
/// Produced only by the parser. When the parser reported errors the program
/// may be partial and must not be handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// The language has only two real statement forms, `let` and `return`;
/// everything else is an expression used in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let <name> = <value>;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The expression producing the bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return <value>;` statement.
    Return {
        /// The expression producing the returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An expression used as a statement, such as `x + 10;`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear only as `if` consequences and alternatives and as function
/// bodies; a `{` in expression position starts a hash literal instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number in the source code.
    pub line:       usize,
}

/// An abstract syntax tree node representing an expression.
///
/// Every variant records the line of the token that introduced it, for
/// diagnostics. Child expressions are always fully parsed; the parser never
/// constructs placeholder nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal; the value excludes the delimiting quotes.
    StringLiteral {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary (prefix) operation such as `!ok` or `-x`.
    Unary {
        /// The unary operator to apply.
        op:    UnaryOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary (infix) operation such as `a + b`.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional expression with an optional alternative.
    If {
        /// The condition deciding which branch runs.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, when present.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal, `fn(x, y) { ... }`.
    ///
    /// Parameters are identifier names only, by construction.
    FunctionLiteral {
        /// The parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call expression; the callee is any expression.
    Call {
        /// The expression producing the callee.
        function:  Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An array literal, `[1, 2 * 2]`.
    ArrayLiteral {
        /// Element expressions.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An index expression, `left[index]`.
    Index {
        /// The expression being indexed.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A hash literal, `{"key": value}`.
    HashLiteral {
        /// Key/value expression pairs in source order.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::HashLiteral { line, .. } => *line,
        }
    }
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!ok`).
    Not,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons; all of them are
/// left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `separator`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                               items: &[T],
                               separator: &str)
                               -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.statements, "")
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.statements, "")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the expression with every operator application fully
    /// parenthesised, e.g. `a + b * c` as `(a + (b * c))`. The precedence
    /// tests rely on this form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::Unary { op, right, .. } => write!(f, "({op}{right})"),
            Self::Binary { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn(")?;
                write_list(f, parameters, ", ")?;
                write!(f, ") {body}")
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}(")?;
                write_list(f, arguments, ", ")?;
                write!(f, ")")
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                write_list(f, elements, ", ")?;
                write!(f, "]")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs, .. } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
