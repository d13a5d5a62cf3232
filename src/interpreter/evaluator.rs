/// Core evaluation logic and limits.
///
/// Contains the main evaluation engine, the call frame used to resolve
/// parameters, and the configurable call-depth limit.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies the arithmetic operators and reports division by zero and
/// non-finite powers.
pub mod binary;

/// Function evaluation.
///
/// Handles calls to user-defined functions, argument checking and parameter
/// binding.
pub mod function;
