//! Calculator core: operators, input events, numeric rendering and the
//! sequential evaluation state machine.
//!
//! Nothing in here performs I/O. Every transition is a total function of the
//! current [`CalculatorState`] and one [`InputEvent`].

mod event;
pub mod number;
mod operations;
mod state;

pub use event::{Digit, InputEvent};
pub use operations::Operator;
pub use state::{CalculatorState, Phase};

use thiserror::Error;

/// Result type for calculator edge operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while building input for the state machine.
///
/// Transitions themselves never fail; these only surface where raw input
/// (bytes, characters, labels, config text) is turned into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Digit outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// Character is not one of the four operator symbols
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(char),

    /// Keyboard character with no calculator meaning
    #[error("Unmapped key: '{0}'")]
    UnmappedKey(char),

    /// Keypad has no button with this label
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    /// State built from outside breaks a data model invariant
    #[error("Invalid calculator state: {0}")]
    InvalidState(String),

    /// Calculator state could not be serialized
    #[error("Snapshot error: {message}")]
    Snapshot {
        /// Error message
        message: String,
    },

    /// Configuration could not be read or written
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a snapshot error
    #[must_use]
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    /// Create an invalid state error
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Create an unknown button error
    #[must_use]
    pub fn unknown_button(label: impl Into<String>) -> Self {
        Self::UnknownButton(label.into())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
