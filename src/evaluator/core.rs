use tracing::{debug, trace};

use crate::{
    error::EvalError,
    evaluator::{
        lexer::{Token, tokenize},
        operator::Operator,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Running state of a left-to-right reduction.
///
/// The reduction keeps a running total, the operator that will be applied to
/// the next completed operand, and the text of the operand currently being
/// accumulated. The pending operator starts as `Add`, so the first operand is
/// added to a total of zero.
///
/// ## Usage
///
/// Feed operand fragments and operators in input order, then call
/// [`Reduction::finish`]:
///
/// ```
/// use padcalc::evaluator::{Operator, core::Reduction};
///
/// let mut reduction = Reduction::new();
/// reduction.push_operand("2", 0);
/// reduction.push_operator(Operator::Add).unwrap();
/// reduction.push_operand("3", 2);
/// reduction.push_operator(Operator::Mul).unwrap();
/// reduction.push_operand("4", 4);
/// assert_eq!(reduction.finish().unwrap(), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    total:    f64,
    pending:  Operator,
    operand:  String,
    position: usize,
}

impl Default for Reduction {
    fn default() -> Self {
        Self::new()
    }
}

impl Reduction {
    /// Creates an empty reduction: total `0`, pending operator `Add`.
    #[must_use]
    pub const fn new() -> Self {
        Self { total:    0.0,
               pending:  Operator::Add,
               operand:  String::new(),
               position: 0, }
    }

    /// The running total so far, not counting the operand being accumulated.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// The operator that will combine the next completed operand.
    #[must_use]
    pub const fn pending(&self) -> Operator {
        self.pending
    }

    /// Appends an operand fragment starting at byte offset `position`.
    ///
    /// Consecutive fragments join into one operand.
    pub fn push_operand(&mut self, text: &str, position: usize) {
        if self.operand.is_empty() {
            self.position = position;
        }
        self.operand.push_str(text);
    }

    /// Completes the current operand (if any) and makes `op` pending.
    ///
    /// An operator with no operand before it only replaces the pending
    /// operator, so `-5` reduces to `0 - 5` and `5+*3` to `5 * 3`.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidOperand` if the completed operand is not a
    /// number.
    pub fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        self.fold()?;
        self.pending = op;
        Ok(())
    }

    /// Completes the last operand and returns the total.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidOperand` if the last operand is not a
    /// number.
    pub fn finish(mut self) -> EvalResult<f64> {
        self.fold()?;
        Ok(self.total)
    }

    fn fold(&mut self) -> EvalResult<()> {
        if self.operand.is_empty() {
            return Ok(());
        }

        let number: f64 =
            self.operand
                .parse()
                .map_err(|_| EvalError::InvalidOperand { segment:  self.operand.clone(),
                                                         position: self.position, })?;
        let total = self.pending.apply(self.total, number);
        trace!(total = self.total, op = %self.pending, number, result = total, "fold");

        self.total = total;
        self.operand.clear();
        Ok(())
    }
}

/// Evaluates an expression strictly left to right.
///
/// Operators have no precedence: each completed operand is combined into the
/// running total with the operator that preceded it. Whitespace and characters
/// outside the calculator alphabet are skipped. The empty expression
/// evaluates to `0`.
///
/// Division by zero is not an error here: the result is `NaN`. Use
/// [`evaluate_strict`] to have non-finite results reported as errors.
///
/// # Errors
/// Returns `EvalError::InvalidOperand` if an operand segment does not convert
/// to a number (for example `5..2` or a lone `.`).
///
/// # Examples
/// ```
/// use padcalc::evaluator::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 20.0);
/// assert_eq!(evaluate("-5").unwrap(), -5.0);
/// assert_eq!(evaluate("").unwrap(), 0.0);
/// assert!(evaluate("10/0").unwrap().is_nan());
/// assert!(evaluate("5..2").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let mut reduction = Reduction::new();

    for (token, position) in tokenize(expression) {
        match token {
            Token::Operand(text) => reduction.push_operand(text, position),
            Token::Operator(op) => reduction.push_operator(op)?,
            Token::Ignored => {},
        }
    }

    let value = reduction.finish()?;
    debug!(expression, value, "evaluated");
    Ok(value)
}

/// Evaluates an expression like [`evaluate`], rejecting non-finite results.
///
/// # Errors
/// Returns `EvalError::InvalidOperand` for malformed operands and
/// `EvalError::NotANumber` if the result is `NaN` (division by zero) or
/// infinite (overflow).
///
/// # Examples
/// ```
/// use padcalc::{error::EvalError, evaluator::evaluate_strict};
///
/// assert_eq!(evaluate_strict("7*6").unwrap(), 42.0);
/// assert!(matches!(evaluate_strict("10/0"), Err(EvalError::NotANumber { .. })));
/// ```
pub fn evaluate_strict(expression: &str) -> EvalResult<f64> {
    let value = evaluate(expression)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NotANumber { value })
    }
}
