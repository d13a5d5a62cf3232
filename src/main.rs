use std::{fs, io, process::ExitCode};

use clap::Parser;
use numerus::{
    RunOptions,
    interpreter::{
        evaluator::core::{Limits, MAX_CALL_DEPTH},
        parser::core::MAX_NESTING_DEPTH,
    },
    run_lines,
};

/// numerus is a line-oriented calculator language with variables and
/// functions. Each line is an assignment or an expression whose value is
/// printed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numerus to treat the contents as a path to a script file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints every result with exactly this many decimals.
    #[arg(short, long)]
    precision: Option<usize>,

    /// How deeply function calls may nest before a line is aborted.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// How deeply a single line may nest before it is rejected.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_nesting_depth: usize,

    /// Stops at the first failing line instead of reporting it and moving on.
    #[arg(long)]
    fail_fast: bool,

    /// The script to run, or a path with `--file`. Lines are read from
    /// standard input when omitted.
    contents: Option<String>,
}

impl Args {
    const fn options(&self) -> RunOptions {
        RunOptions { precision: self.precision,
                     limits:    Limits { max_call_depth:    self.max_call_depth,
                                         max_nesting_depth: self.max_nesting_depth, },
                     fail_fast: self.fail_fast, }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = args.options();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let result = match &args.contents {
        Some(path) if args.file => match fs::read(path) {
            Ok(script) => run_lines(script.as_slice(), &mut stdout, &mut stderr, options),
            Err(_) => {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        },
        Some(script) => run_lines(script.as_bytes(), &mut stdout, &mut stderr, options),
        None => run_lines(io::stdin().lock(), &mut stdout, &mut stderr, options),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Args;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn file_flag_needs_a_path() {
        assert!(Args::try_parse_from(["numerus", "--file"]).is_err());
        assert!(Args::try_parse_from(["numerus", "--file", "script.num"]).is_ok());
        assert!(Args::try_parse_from(["numerus"]).is_ok());
    }

    #[test]
    fn flags_map_onto_run_options() {
        let args = Args::try_parse_from(["numerus",
                                         "-p",
                                         "2",
                                         "--max-call-depth",
                                         "10",
                                         "--max-nesting-depth",
                                         "20",
                                         "--fail-fast",
                                         "1 + 1"]).unwrap();
        let options = args.options();

        assert_eq!(options.precision, Some(2));
        assert_eq!(options.limits.max_call_depth, 10);
        assert_eq!(options.limits.max_nesting_depth, 20);
        assert!(options.fail_fast);
    }
}
