/// Number formatting for printed results.
///
/// This module turns evaluated values into the decimal text written for each
/// expression line, either in the shortest form that reads back to the same
/// value or with a fixed number of decimals.
pub mod format;
