use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node owns its children exclusively. Trees are built bottom-up by the
/// parser and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// Function call expression (e.g. `f(2, x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Arithmetic negation (e.g. `-x`).
    UnaryMinus {
        /// The negated expression.
        operand: Box<Self>,
    },
}

impl Expr {
    /// Returns `true` if this expression contains a call to `name` anywhere in
    /// its tree, including calls nested inside the arguments of other calls.
    ///
    /// ## Example
    /// ```
    /// use numerus::interpreter::parser::core::parse_expression_str;
    ///
    /// let expr = parse_expression_str("g(f(x)) + 1").unwrap();
    ///
    /// assert!(expr.calls("f"));
    /// assert!(expr.calls("g"));
    /// assert!(!expr.calls("x"));
    /// ```
    #[must_use]
    pub fn calls(&self, name: &str) -> bool {
        match self {
            Self::Number { .. } | Self::Variable { .. } => false,
            Self::Call { name: callee,
                         arguments, } => {
                callee == name || arguments.iter().any(|argument| argument.calls(name))
            },
            Self::BinaryOp { left, right, .. } => left.calls(name) || right.calls(name),
            Self::UnaryMinus { operand } => operand.calls(name),
        }
    }
}

/// Represents a user-defined function definition such as `f(a, b) = a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, distinct and in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
}

impl FunctionDef {
    /// Whether the body calls the function being defined.
    ///
    /// Only direct self-reference is detected. A function that reaches itself
    /// through another function is not.
    #[must_use]
    pub fn is_directly_recursive(&self) -> bool {
        self.body.calls(&self.name)
    }
}

/// Represents a top-level statement.
///
/// Every input line parses to exactly one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to the value of an expression.
    VariableAssignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A user-defined function declaration.
    FunctionAssignment(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// Represents a binary operator.
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
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Formats the expression fully parenthesized, so the printed form shows how
/// precedence and associativity were resolved.
///
/// ```
/// use numerus::interpreter::parser::core::parse_expression_str;
///
/// let expr = parse_expression_str("2 ^ 3 ^ 2 - -x").unwrap();
/// assert_eq!(expr.to_string(), "((2 ^ (3 ^ 2)) - (-x))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryMinus { operand } => write!(f, "(-{operand})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariableAssignment { name, value } => write!(f, "{name} = {value}"),
            Self::FunctionAssignment(def) => {
                write!(f, "{}({}) = {}", def.name, def.params.join(", "), def.body)
            },
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}
