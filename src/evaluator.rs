/// Left-to-right reduction of a token stream into a running total.
///
/// Contains the `Reduction` accumulator and the `evaluate` entry points.
/// There is no operator precedence: `2+3*4` reduces to `(2+3)*4`.
pub mod core;

/// The lexer module tokenizes calculator expressions.
///
/// Produces operand fragments (runs of digits and decimal points) and
/// operator tokens. Whitespace and any other character are dropped by
/// `tokenize` and never reach the reducer.
pub mod lexer;

/// The four arithmetic operators and how they combine two numbers.
pub mod operator;

pub use self::{
    core::{EvalResult, evaluate, evaluate_strict},
    operator::{Operator, perform_operation},
};
