use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reading keypad input.
pub enum KeyError {
    /// The label does not name a key on the keypad.
    #[error("Unknown key '{label}'. Expected one of 0-9 + - * / . C AC =.")]
    UnknownKey {
        /// The label that was read.
        label: String,
    },
}
