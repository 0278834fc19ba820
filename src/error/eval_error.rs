use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// An operand segment could not be converted to a number, e.g. `5..2` or
    /// a lone `.`.
    #[error("Invalid operand '{segment}' at position {position}.")]
    InvalidOperand {
        /// The accumulated operand text.
        segment:  String,
        /// Byte offset of the segment in the expression.
        position: usize,
    },
    /// The expression reduced to a value that cannot be shown as a number.
    ///
    /// Only strict evaluation produces this; plain evaluation returns the
    /// value itself (NaN after a division by zero).
    #[error("Result is not a number: {value}.")]
    NotANumber {
        /// The offending value.
        value: f64,
    },
}
