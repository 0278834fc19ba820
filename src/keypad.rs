/// Keypad events and their labels.
///
/// Declares the `Key` enum delivered by the user interface, parsing of key
/// labels (`"7"`, `"+"`, `"C"`, `"AC"`, `"="`, ...) and of whole key scripts.
pub mod key;

/// Display texts and number formatting used by the keypad.
pub mod config;

/// The input state machine.
///
/// Holds the expression buffer, the explicit `Phase` that replaces the
/// placeholder-text checks of a view-bound implementation, and the two display
/// lines. `Keypad::press` is a pure reducer from state and key to the next
/// state.
///
/// # Responsibilities
/// - Accumulates digits, operators and decimal points into the buffer.
/// - Keeps at most one decimal point per operand segment.
/// - Evaluates the buffer on `=` and shows the result or the error text.
pub mod state;

pub use self::{
    config::KeypadConfig,
    key::{Key, parse_keys},
    state::{Keypad, Phase, Screen},
};
