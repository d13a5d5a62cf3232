/// Formats a value the way results are printed.
///
/// Without a precision, integral values print without a fractional part and
/// all other values use the shortest decimal that reads back to the same
/// `f64`. Negative zero prints as `0`. With a precision, exactly that many
/// decimals are printed. Non-finite values print as `inf`, `-inf` or `NaN`
/// in both modes.
///
/// ## Parameters
/// - `value`: The number to format.
/// - `precision`: Optional fixed number of decimals.
///
/// ## Example
/// ```
/// use numerus::util::format::format_number;
///
/// assert_eq!(format_number(14.0, None), "14");
/// assert_eq!(format_number(0.1 + 0.2, None), "0.30000000000000004");
/// assert_eq!(format_number(-0.0, None), "0");
/// assert_eq!(format_number(2.0 / 3.0, Some(4)), "0.6667");
/// assert_eq!(format_number(f64::INFINITY, Some(2)), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // -0.0 == 0.0, so this also catches negative zero
    let value = if value == 0.0 { 0.0 } else { value };

    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    }
}
