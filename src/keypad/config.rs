use crate::{
    keypad::state::Screen,
    util::num::{DEFAULT_PRECISION, MAX_PRECISION},
};

/// Texts and formatting options for a [`Keypad`](crate::keypad::Keypad).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadConfig {
    /// What the display shows before the first key press.
    pub placeholder: Screen,
    /// Primary line after `AC`.
    pub zero_text:   String,
    /// Primary line after a failed evaluation.
    pub error_text:  String,
    /// Maximum number of fractional digits on the result line. Values above
    /// `MAX_PRECISION` are treated as `MAX_PRECISION`.
    pub precision:   usize,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self { placeholder: Screen::new("", "0"),
               zero_text:   "0".to_string(),
               error_text:  "Error".to_string(),
               precision:   DEFAULT_PRECISION, }
    }
}

impl KeypadConfig {
    /// Replaces the primary line shown before the first key press.
    #[must_use]
    pub fn with_placeholder(mut self, primary: impl Into<String>) -> Self {
        self.placeholder.primary = primary.into();
        self
    }

    /// Replaces the primary line shown after a failed evaluation.
    #[must_use]
    pub fn with_error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = error_text.into();
        self
    }

    /// Sets the number of fractional digits, capped at `MAX_PRECISION`.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }
}
