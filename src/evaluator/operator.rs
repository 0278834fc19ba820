use std::fmt;

/// An arithmetic operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the operator written as `c`, if any.
    ///
    /// # Example
    /// ```
    /// use padcalc::evaluator::Operator;
    ///
    /// assert_eq!(Operator::from_char('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character used for this operator in expressions.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Combines the running total with the next operand.
    ///
    /// Division by zero does not fail: it yields `f64::NAN`, which callers
    /// have to check for if they want to treat it as an error.
    #[must_use]
    pub fn apply(self, total: f64, number: f64) -> f64 {
        match self {
            Self::Add => total + number,
            Self::Sub => total - number,
            Self::Mul => total * number,
            Self::Div => {
                if number == 0.0 {
                    f64::NAN
                } else {
                    total / number
                }
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combines `total` and `number` with `op`.
///
/// # Example
/// ```
/// use padcalc::evaluator::{Operator, perform_operation};
///
/// assert_eq!(perform_operation(6.0, 3.0, Operator::Div), 2.0);
/// assert!(perform_operation(6.0, 0.0, Operator::Div).is_nan());
/// ```
#[must_use]
pub fn perform_operation(total: f64, number: f64, op: Operator) -> f64 {
    op.apply(total, number)
}
