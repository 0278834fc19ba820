use std::{fmt, str::FromStr};

use crate::{error::KeyError, evaluator::Operator};

/// A key press delivered by the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit key, `0` through `9`.
    ///
    /// Build it with [`Key::digit`] or by parsing a label. A value above `9`
    /// writes nothing and the keypad ignores it.
    Digit(u8),
    /// An operator key.
    Operator(Operator),
    /// The decimal point key, `.`.
    Decimal,
    /// Removes the last character of the expression (`C`).
    DeleteLast,
    /// Resets the calculator (`AC`).
    ClearAll,
    /// Evaluates the expression (`=`).
    Evaluate,
}

impl Key {
    /// Returns the digit key for `d`, or `None` if `d` is not a single digit.
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 { Some(Self::Digit(d)) } else { None }
    }

    /// The character this key writes into the expression buffer, if any.
    ///
    /// # Example
    /// ```
    /// use padcalc::{evaluator::Operator, keypad::Key};
    ///
    /// assert_eq!(Key::Digit(7).to_char(), Some('7'));
    /// assert_eq!(Key::Operator(Operator::Div).to_char(), Some('/'));
    /// assert_eq!(Key::Evaluate.to_char(), None);
    /// ```
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Operator(op) => Some(op.symbol()),
            Self::Decimal => Some('.'),
            Self::DeleteLast | Self::ClearAll | Self::Evaluate => None,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10)
                          .and_then(|d| u8::try_from(d).ok())
                          .map(Self::Digit),
            '.' => Some(Self::Decimal),
            'C' => Some(Self::DeleteLast),
            '=' => Some(Self::Evaluate),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Decimal => write!(f, "."),
            Self::DeleteLast => write!(f, "C"),
            Self::ClearAll => write!(f, "AC"),
            Self::Evaluate => write!(f, "="),
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// Parses a key label as printed on the keypad.
    ///
    /// # Example
    /// ```
    /// use padcalc::keypad::Key;
    ///
    /// assert_eq!("AC".parse::<Key>().unwrap(), Key::ClearAll);
    /// assert_eq!("C".parse::<Key>().unwrap(), Key::DeleteLast);
    /// assert!("%".parse::<Key>().is_err());
    /// ```
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label == "AC" {
            return Ok(Self::ClearAll);
        }

        let mut chars = label.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        key.ok_or_else(|| KeyError::UnknownKey { label: label.to_string() })
    }
}

/// Reads a key script: whitespace separated key labels.
///
/// A word that is not a single label is read one character at a time, so
/// `"12+3="` and `"1 2 + 3 ="` describe the same five key presses. `AC` is
/// only recognised as a word of its own.
///
/// # Errors
/// Returns `KeyError::UnknownKey` for the first character that is not a key.
///
/// # Example
/// ```
/// use padcalc::{
///     evaluator::Operator,
///     keypad::{Key, parse_keys},
/// };
///
/// let keys = parse_keys("12+3 = AC").unwrap();
/// assert_eq!(keys,
///            vec![Key::Digit(1),
///                 Key::Digit(2),
///                 Key::Operator(Operator::Add),
///                 Key::Digit(3),
///                 Key::Evaluate,
///                 Key::ClearAll]);
/// ```
pub fn parse_keys(script: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();

    for word in script.split_whitespace() {
        if let Ok(key) = word.parse::<Key>() {
            keys.push(key);
            continue;
        }
        for c in word.chars() {
            let key = Key::from_char(c).ok_or_else(|| KeyError::UnknownKey { label: c.to_string() })?;
            keys.push(key);
        }
    }

    Ok(keys)
}
