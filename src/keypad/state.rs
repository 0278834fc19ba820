use tracing::{debug, warn};

use crate::{
    evaluator::{Operator, evaluate_strict},
    keypad::{config::KeypadConfig, key::Key},
    util::num::{format_number, to_expression},
};

/// Where the keypad is in its input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing entered since start-up or `AC`; the next character replaces
    /// the placeholder.
    Fresh,
    /// The buffer holds user input.
    Editing,
    /// The buffer holds the result of the last evaluation. A digit or decimal
    /// point starts a new expression; an operator continues from the result.
    Evaluated,
}

/// The two display lines handed to the user interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Screen {
    /// Upper line: the expression being entered.
    pub secondary: String,
    /// Main line: the live echo, the result, or the error text.
    pub primary:   String,
}

impl Screen {
    /// Creates a screen from its two lines.
    pub fn new(secondary: impl Into<String>, primary: impl Into<String>) -> Self {
        Self { secondary: secondary.into(),
               primary:   primary.into(), }
    }
}

/// Calculator input state.
///
/// `Keypad` is a value: [`Keypad::press`] consumes the current state and
/// returns the next one, and nothing else is mutated.
///
/// # Example
/// ```
/// use padcalc::keypad::{Keypad, Phase, parse_keys};
///
/// let keypad = Keypad::default().press_all(parse_keys("2+3*4=").unwrap());
/// assert_eq!(keypad.buffer(), "20");
/// assert_eq!(keypad.phase(), Phase::Evaluated);
/// assert_eq!(keypad.screen().primary, "20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buffer: String,
    phase:  Phase,
    screen: Screen,
    config: KeypadConfig,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(KeypadConfig::default())
    }
}

impl Keypad {
    /// Creates a fresh keypad showing the configured placeholder.
    #[must_use]
    pub fn new(config: KeypadConfig) -> Self {
        Self { buffer: String::new(),
               phase: Phase::Fresh,
               screen: config.placeholder.clone(),
               config }
    }

    /// The expression entered so far.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The lines to display.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The configuration this keypad was created with.
    #[must_use]
    pub const fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Applies one key press and returns the next state.
    #[must_use]
    pub fn press(self, key: Key) -> Self {
        let before = self.phase;
        let next = match key {
            Key::ClearAll => self.clear_all(),
            Key::DeleteLast => self.delete_last(),
            Key::Decimal => self.decimal(),
            Key::Digit(_) | Key::Operator(_) => self.insert(key),
            Key::Evaluate => self.evaluate(),
        };
        debug!(%key, from = ?before, to = ?next.phase, buffer = %next.buffer, "key");
        next
    }

    /// Applies a sequence of key presses in order.
    #[must_use]
    pub fn press_all(self, keys: impl IntoIterator<Item = Key>) -> Self {
        keys.into_iter().fold(self, Self::press)
    }

    fn clear_all(mut self) -> Self {
        self.buffer.clear();
        self.phase = Phase::Fresh;
        self.screen = Screen::new("", self.config.zero_text.clone());
        self
    }

    fn delete_last(mut self) -> Self {
        if self.buffer.pop().is_none() {
            return self;
        }
        if self.phase == Phase::Evaluated {
            self.phase = Phase::Editing;
        }
        self.screen.secondary.clone_from(&self.buffer);
        self
    }

    fn decimal(mut self) -> Self {
        match self.phase {
            Phase::Fresh | Phase::Evaluated => {
                self.buffer = ".".to_string();
                self.phase = Phase::Editing;
            },
            Phase::Editing => {
                if self.segment_has_decimal() {
                    return self;
                }
                self.buffer.push('.');
            },
        }
        self.screen.secondary.clone_from(&self.buffer);
        self
    }

    fn insert(mut self, key: Key) -> Self {
        let Some(c) = key.to_char() else {
            debug!(%key, "key writes no character, ignored");
            return self;
        };

        let replace = match self.phase {
            Phase::Fresh => true,
            Phase::Evaluated => matches!(key, Key::Digit(_)),
            Phase::Editing => false,
        };
        if replace {
            self.buffer.clear();
        }
        self.buffer.push(c);
        self.phase = Phase::Editing;
        self.screen = Screen::new(self.buffer.clone(), self.buffer.clone());
        self
    }

    fn evaluate(mut self) -> Self {
        match evaluate_strict(&self.buffer) {
            Ok(value) => {
                self.buffer = to_expression(value);
                self.phase = Phase::Evaluated;
                self.screen = Screen::new(self.buffer.clone(),
                                          format_number(value, self.config.precision));
            },
            Err(e) => {
                warn!(expression = %self.buffer, error = %e, "evaluation failed");
                self.screen = Screen::new(self.buffer.clone(), self.config.error_text.clone());
            },
        }
        self
    }

    /// Whether the operand segment being typed already has a decimal point.
    fn segment_has_decimal(&self) -> bool {
        self.buffer
            .rsplit(|c: char| Operator::from_char(c).is_some())
            .next()
            .is_some_and(|segment| segment.contains('.'))
    }
}
