//! # padcalc
//!
//! padcalc is the core of a keypad calculator written in Rust.
//! It turns key presses into an expression buffer and evaluates that buffer
//! strictly left to right, without operator precedence: `2+3*4` is `20`.

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

use crate::{
    error::KeyError,
    keypad::{Keypad, KeypadConfig, Screen, parse_keys},
};

/// Provides the error types for evaluation and keypad input.
///
/// This module defines the errors that can be raised while reducing an
/// expression or while reading key labels. Each error carries enough detail
/// (offending text, position) to explain the failure to a user.
pub mod error;
/// Reduces calculator expressions to numbers.
///
/// This module ties together the lexer, the operator table and the
/// left-to-right reducer. Its entry points are `evaluate`, which keeps the
/// `NaN` produced by a division by zero, and `evaluate_strict`, which reports
/// it as an error.
///
/// # Responsibilities
/// - Tokenizes digit/operator strings, ignoring whitespace and unknown
///   characters.
/// - Folds operands into a running total with the pending operator.
/// - Reports operand segments that do not convert to a number.
pub mod evaluator;
/// The input side of the calculator.
///
/// This module declares the keys a user interface sends, the state machine
/// that accumulates them into an expression, and the two display lines it
/// produces.
pub mod keypad;
/// General numeric helpers.
///
/// Exact integer conversion and result formatting shared by the keypad and
/// the command line driver.
pub mod util;

/// Replays a key script on a fresh keypad and returns the final display.
///
/// The script is parsed with [`parse_keys`]: whitespace separated key labels,
/// where words that are not labels are read one character at a time.
///
/// # Errors
/// Returns an error if the script contains a character that is not a key.
/// Evaluation failures are not errors; they show up as the configured error
/// text on the primary line.
///
/// # Examples
/// ```
/// use padcalc::{keypad::KeypadConfig, run_keys};
///
/// let screen = run_keys("7 + 3 =", KeypadConfig::default()).unwrap();
/// assert_eq!(screen.primary, "10");
///
/// let screen = run_keys("8/0=", KeypadConfig::default()).unwrap();
/// assert_eq!(screen.secondary, "8/0");
/// assert_eq!(screen.primary, "Error");
///
/// assert!(run_keys("7 ^ 2", KeypadConfig::default()).is_err());
/// ```
pub fn run_keys(script: &str, config: KeypadConfig) -> Result<Screen, KeyError> {
    let keys = parse_keys(script)?;
    let keypad = Keypad::new(config).press_all(keys);
    Ok(keypad.screen().clone())
}
