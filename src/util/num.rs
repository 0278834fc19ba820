/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;
/// Number of fractional digits used when none is configured.
pub const DEFAULT_PRECISION: usize = 10;
/// Largest number of fractional digits `format_number` will print; larger
/// requests are clamped to it.
pub const MAX_PRECISION: usize = 64;

/// Converts an `f64` to `i64` if the value is finite, integral and exactly
/// representable.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The integral value.
/// - `None`: If the value is non-finite, fractional, or larger than
///   `MAX_SAFE_I64_INT` in absolute value.
///
/// ## Example
/// ```
/// use padcalc::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Formats a number for the display line.
///
/// Integral values print as plain integers. Other values print with at most
/// `precision` fractional digits (clamped to `MAX_PRECISION`); trailing zeros
/// and a trailing decimal point are removed. Negative zero prints as `0`.
///
/// The output is rounded, so it is only meant to be shown. Use
/// [`to_expression`] for text that is evaluated again.
///
/// ## Example
/// ```
/// use padcalc::util::num::format_number;
///
/// assert_eq!(format_number(20.0, 10), "20");
/// assert_eq!(format_number(-5.0, 10), "-5");
/// assert_eq!(format_number(2.5, 10), "2.5");
/// assert_eq!(format_number(1.0 / 3.0, 4), "0.3333");
/// assert_eq!(format_number(-1e-12, 10), "0");
/// assert_eq!(format_number(1e20, 10), "100000000000000000000");
/// assert_eq!(format_number(0.5, 70_000), "0.5");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    if let Some(integer) = f64_to_i64_exact(value) {
        return integer.to_string();
    }

    let precision = precision.min(MAX_PRECISION);
    let formatted = format!("{value:.precision$}");
    if !formatted.contains('.') {
        return formatted;
    }

    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Writes a number back as expression text without losing precision.
///
/// Uses the shortest decimal form that parses back to the same `f64`. It
/// never uses an exponent, so the result only contains digits, `.` and a
/// leading `-` for every finite input. Negative zero is written as `0`.
///
/// ## Example
/// ```
/// use padcalc::util::num::to_expression;
///
/// assert_eq!(to_expression(20.0), "20");
/// assert_eq!(to_expression(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(to_expression(-0.0), "0");
///
/// let tiny = 1.0 / 3e12;
/// assert_eq!(to_expression(tiny).parse::<f64>().unwrap(), tiny);
/// ```
#[must_use]
pub fn to_expression(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
