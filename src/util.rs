/// Numeric conversion and display helpers.
///
/// This module turns evaluation results into the text shown on the keypad
/// display and written back into the expression buffer. Integral values print
/// without a fractional part as long as they are exactly representable as an
/// `f64`; everything else prints with a bounded number of fractional digits.
pub mod num;
