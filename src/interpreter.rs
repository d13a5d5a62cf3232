/// The environment module stores the bindings of a run.
///
/// Variables and functions share a single namespace mapping each name to a
/// [`environment::Binding`]. Later assignments overwrite earlier ones
/// regardless of kind.
pub mod environment;
/// The evaluator module computes the value of expressions.
///
/// The evaluator walks the AST against a borrowed environment, performing
/// arithmetic, resolving variables and calling user-defined functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves parameters before globals inside function bodies.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes a line for further parsing.
///
/// The lexer reads the raw text of one line and produces a sequence of
/// tokens, each paired with the byte offset where it starts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the tokens of one line and constructs a statement:
/// an assignment or an expression.
///
/// # Responsibilities
/// - Resolves operator precedence and associativity.
/// - Distinguishes variable and function assignments from expressions.
/// - Rejects malformed lines and self-calling function definitions.
pub mod parser;
/// The session module executes lines against a persistent environment.
///
/// A session owns the environment of one run and applies assignments only
/// after they have been fully parsed and evaluated.
pub mod session;
