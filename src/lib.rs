//! # numerus
//!
//! numerus is a line-oriented interpreter for a small arithmetic language
//! written in Rust. Each line either binds a variable (`x = 5`), defines a
//! function (`f(a, b) = a + b`) or is an expression whose value is printed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    error::{LineError, ParseError},
    interpreter::{
        evaluator::core::Limits,
        session::{Outcome, Session},
    },
    util::format::format_number,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent a
/// parsed line as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Detects direct self-calls in function bodies.
/// - Prints trees fully parenthesized for debugging and tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a line, and the [`error::LineError`] wrapper that attaches a
/// line number for reporting.
pub mod error;
/// Orchestrates the processing of each line.
///
/// This module ties together lexing, parsing, the environment and
/// evaluation, and exposes the [`interpreter::session::Session`] that runs
/// lines one at a time.
pub mod interpreter;
/// General utilities.
///
/// Currently the formatting of printed numbers.
pub mod util;

/// Runs every line of `source` in a fresh session and returns the printed
/// values in order.
///
/// Blank lines are skipped. Execution stops at the first failing line.
///
/// # Errors
/// Returns the first failure together with its 1-based line number.
///
/// # Examples
/// ```
/// use numerus::run_script;
///
/// let printed = run_script("x = 5\nx + 1\n\nx = 10\nx + 1").unwrap();
/// assert_eq!(printed, vec![6.0, 11.0]);
///
/// // 'y' is not defined on the second line.
/// let error = run_script("1 + 1\ny * 2").unwrap_err();
/// assert_eq!(error.line, 2);
/// assert_eq!(error.to_string(), "Error on line 2: Undefined variable 'y'.");
/// ```
pub fn run_script(source: &str) -> Result<Vec<f64>, LineError> {
    let mut session = Session::new();
    let mut printed = Vec::new();

    for (index, line) in source.lines().enumerate() {
        match session.execute_line(line) {
            Ok(Outcome::Value(value)) => printed.push(value),
            Ok(_) => {},
            Err(error) => return Err(LineError::new(index + 1, error)),
        }
    }

    Ok(printed)
}

/// Settings for [`run_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Prints every value with exactly this many decimals.
    pub precision: Option<usize>,
    /// Limits applied to every line.
    pub limits:    Limits,
    /// Stops at the first failing line.
    pub fail_fast: bool,
}

/// Runs the lines read from `input` in one session, writing each printed
/// value to `out` and each failure to `err` as
/// `Error on line N: message`.
///
/// A failing line, including one that is not valid UTF-8, is reported and
/// the run moves on to the next line unless [`RunOptions::fail_fast`] is set.
///
/// # Returns
/// Whether every line succeeded.
///
/// # Errors
/// Returns an I/O error if reading `input` or writing either stream fails.
///
/// # Example
/// ```
/// use numerus::{RunOptions, run_lines};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let ok = run_lines(&b"x = 1 / 3\ny\nx * 3"[..], &mut out, &mut err, RunOptions::default())
///     .unwrap();
///
/// assert!(!ok);
/// assert_eq!(String::from_utf8(out).unwrap(), "1\n");
/// assert_eq!(String::from_utf8(err).unwrap(),
///            "Error on line 2: Undefined variable 'y'.\n");
/// ```
pub fn run_lines<R, W, E>(input: R, out: &mut W, err: &mut E, options: RunOptions) -> io::Result<bool>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut session = Session::with_limits(options.limits);
    let mut succeeded = true;

    for (index, bytes) in input.split(b'\n').enumerate() {
        let outcome = match String::from_utf8(bytes?) {
            Ok(line) => session.execute_line(&line),
            Err(e) => Err(ParseError::InvalidUtf8 { position: e.utf8_error().valid_up_to() }.into()),
        };

        match outcome {
            Ok(Outcome::Value(value)) => writeln!(out, "{}", format_number(value, options.precision))?,
            Ok(_) => {},
            Err(error) => {
                succeeded = false;
                out.flush()?;
                writeln!(err, "{}", LineError::new(index + 1, error))?;
                if options.fail_fast {
                    break;
                }
            },
        }
    }

    out.flush()?;
    Ok(succeeded)
}
