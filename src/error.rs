/// Evaluation errors.
///
/// Defines the errors that can occur while reducing an expression: operand
/// segments that do not convert to a number, and (for strict evaluation)
/// results that are not finite numbers.
pub mod eval_error;
/// Keypad input errors.
///
/// Errors raised while turning key labels or key scripts into keypad events.
pub mod key_error;

pub use eval_error::EvalError;
pub use key_error::KeyError;
