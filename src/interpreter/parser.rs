/// Entry points and the shared result type.
///
/// Contains the expression entry point and helpers that tokenize and parse a
/// whole line in one step.
pub mod core;

/// Unary and primary expressions.
///
/// Handles negation, literals, variables, calls and parenthesized groups.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements the sum, product and power levels of the grammar.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers for identifiers, parenthesized lists and the end of the
/// line.
pub mod utils;

/// Statement parsing.
///
/// Decides whether a line is an assignment or an expression and rejects
/// function definitions that call themselves.
pub mod statement;
