use numerus::{
    ast::{BinaryOperator, Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{MAX_NESTING_DEPTH, check_nesting_depth, parse_expression_str, parse_line},
    },
};
use pretty_assertions::assert_eq;

fn num(value: f64) -> Expr {
    Expr::Number { value }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string() }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}

fn shape(src: &str) -> String {
    parse_expression_str(src).unwrap_or_else(|e| panic!("{src}: {e}"))
                             .to_string()
}

#[test]
fn tokenize_all_token_kinds() {
    let tokens = tokenize("f(a_1, 2.5) = -3 + x * y / z ^ 2 % 4")
        .unwrap()
        .into_iter()
        .map(|(tok, _)| tok)
        .collect::<Vec<_>>();

    assert_eq!(tokens,
               vec![Token::Identifier("f".to_string()),
                    Token::LParen,
                    Token::Identifier("a_1".to_string()),
                    Token::Comma,
                    Token::Number(2.5),
                    Token::RParen,
                    Token::Equals,
                    Token::Minus,
                    Token::Number(3.0),
                    Token::Plus,
                    Token::Identifier("x".to_string()),
                    Token::Star,
                    Token::Identifier("y".to_string()),
                    Token::Slash,
                    Token::Identifier("z".to_string()),
                    Token::Caret,
                    Token::Number(2.0),
                    Token::Percent,
                    Token::Number(4.0)]);
}

#[test]
fn tokenize_records_positions_and_skips_whitespace() {
    assert_eq!(tokenize("\t12  +\t3").unwrap(),
               vec![(Token::Number(12.0), 1), (Token::Plus, 5), (Token::Number(3.0), 7)]);
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn tokenize_rejects_unknown_characters() {
    assert_eq!(tokenize("2 # comment"),
               Err(ParseError::UnrecognizedCharacter { found:    "#".to_string(),
                                                       position: 2, }));
    assert!(tokenize("_x").is_err());
    assert!(tokenize(".5").is_err());
    assert!(tokenize("1.").is_err());
    assert!(tokenize("x == y").is_ok());
}

#[test]
fn parse_expr_works() {
    let target = binary(var("x"),
                        BinaryOperator::Add,
                        binary(num(1.0),
                               BinaryOperator::Mul,
                               binary(num(2.0), BinaryOperator::Sub, num(3.0))));
    assert_eq!(parse_expression_str("x + 1 * (2 - 3)").unwrap(), target);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(shape("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(shape("8 / 4 % 3 * 2"), "(((8 / 4) % 3) * 2)");
    assert_eq!(shape("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
    assert_eq!(shape("2 * 3 ^ 2"), "(2 * (3 ^ 2))");
    assert_eq!(shape("-2 ^ 2"), "((-2) ^ 2)");
    assert_eq!(shape("2 ^ -x"), "(2 ^ (-x))");
    assert_eq!(shape("- -1"), "(-(-1))");
}

#[test]
fn calls_and_arguments() {
    assert_eq!(parse_expression_str("f()").unwrap(),
               Expr::Call { name:      "f".to_string(),
                            arguments: vec![], });
    assert_eq!(shape("f(1, g(x), 2 + 3)"), "f(1, g(x), (2 + 3))");
    assert_eq!(shape("f (x)"), "f(x)");
}

#[test]
fn variable_assignment() {
    assert_eq!(parse_line("x = 1 + 2").unwrap(),
               Statement::VariableAssignment { name:  "x".to_string(),
                                               value: binary(num(1.0),
                                                             BinaryOperator::Add,
                                                             num(2.0)), });
}

#[test]
fn function_assignment() {
    assert_eq!(parse_line("area(w, h) = w * h").unwrap(),
               Statement::FunctionAssignment(FunctionDef { name:   "area".to_string(),
                                                           params: vec!["w".to_string(),
                                                                        "h".to_string()],
                                                           body:   binary(var("w"),
                                                                          BinaryOperator::Mul,
                                                                          var("h")), }));

    let Statement::FunctionAssignment(def) = parse_line("pi() = 3.14159").unwrap() else {
        panic!("expected a function assignment");
    };
    assert!(def.params.is_empty());
}

#[test]
fn other_shapes_are_expressions() {
    assert!(matches!(parse_line("f(x)").unwrap(), Statement::Expression { .. }));
    assert!(matches!(parse_line("x").unwrap(), Statement::Expression { .. }));
    assert!(matches!(parse_line("f(x) + 1").unwrap(), Statement::Expression { .. }));
}

#[test]
fn call_with_arguments_before_equals_is_a_syntax_error() {
    assert_eq!(parse_line("f(1) = 2"),
               Err(ParseError::UnexpectedToken { found:    "'='".to_string(),
                                                 expected: "end of line",
                                                 position: 5, }));
    assert!(parse_line("f(a + 1) = 2").is_err());
    assert!(parse_line("f(a,) = 2").is_err());
}

#[test]
fn assignment_to_non_identifier_is_a_syntax_error() {
    assert!(parse_line("1 = 2").unwrap_err().is_syntax_error());
    assert!(parse_line("x + 1 = 2").unwrap_err().is_syntax_error());
    assert!(parse_line("x = y = 2").unwrap_err().is_syntax_error());
}

#[test]
fn duplicate_parameters_are_rejected() {
    assert_eq!(parse_line("f(a, b, a) = a"),
               Err(ParseError::DuplicateParameter { name:     "a".to_string(),
                                                    position: 8, }));
}

#[test]
fn malformed_lines_report_what_was_expected() {
    assert_eq!(parse_line("2 +"),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression" }));
    assert_eq!(parse_line("(1 + 2"),
               Err(ParseError::UnexpectedEndOfInput { expected: "')'" }));
    assert_eq!(parse_line("f(1 2)"),
               Err(ParseError::UnexpectedToken { found:    "number 2".to_string(),
                                                 expected: "',' or ')'",
                                                 position: 4, }));
    assert_eq!(parse_line("2 3"),
               Err(ParseError::UnexpectedToken { found:    "number 3".to_string(),
                                                 expected: "end of line",
                                                 position: 2, }));
    assert_eq!(parse_line("* 2"),
               Err(ParseError::UnexpectedToken { found:    "'*'".to_string(),
                                                 expected: "an expression",
                                                 position: 0, }));
    assert_eq!(parse_line("f(a, b) = "),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression" }));
    assert!(parse_line("").is_err());
}

#[test]
fn recursion_is_checked_after_the_line_is_complete() {
    assert_eq!(parse_line("f(n) = n * f(n - 1)"),
               Err(ParseError::RecursiveDefinition { name: "f".to_string() }));
    assert!(parse_line("f(n) = f(n) )").unwrap_err().is_syntax_error());
    assert!(parse_line("f(f) = f + 1").is_ok());
}

#[test]
fn error_positions() {
    assert_eq!(parse_line("1 + )").unwrap_err().position(), Some(4));
    assert_eq!(parse_line("1 +").unwrap_err().position(), None);
}

#[test]
fn statements_print_back_fully_parenthesized() {
    assert_eq!(parse_line("f(a, b) = a + b * 2").unwrap().to_string(),
               "f(a, b) = (a + (b * 2))");
    assert_eq!(parse_line("x = -y").unwrap().to_string(), "x = (-y)");
}

#[test]
fn nesting_is_checked_before_parsing() {
    let deep = format!("{}x{}", "(".repeat(5_000), ")".repeat(5_000));
    assert_eq!(parse_line(&deep),
               Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH }));
    assert_eq!(parse_expression_str(&vec!["x"; 1_000].join(" * ")),
               Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH }));

    let tokens = tokenize("f(a, b + c) - -d").unwrap();
    assert_eq!(check_nesting_depth(&tokens, 5), Ok(()));
    assert!(check_nesting_depth(&tokens, 4).is_err());
    assert_eq!(check_nesting_depth(&tokenize("((1) + 2").unwrap(), 4), Ok(()));
}
