//! Calculator session
//!
//! Owns one [`CalculatorState`] for the lifetime of a keypad and is the
//! object a front end talks to: it forwards events, reports the display and
//! the operator to highlight.

use tracing::{debug, trace};

use crate::config::CalculatorConfig;
use crate::core::number::digit_count;
use crate::core::{CalcError, CalcResult, CalculatorState, InputEvent, Operator};

/// A running calculator
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Current state
    state: CalculatorState,
    /// Session configuration
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
        }
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the operator whose key should be highlighted
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.state.pending_operator()
    }

    /// Returns the full state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Applies an event and returns the new display
    pub fn press(&mut self, event: InputEvent) -> &str {
        if self.exceeds_digit_cap(event) {
            trace!(display = self.state.display(), "digit ignored, operand at length cap");
            return self.state.display();
        }

        self.state.apply(event);
        debug!(
            ?event,
            display = self.state.display(),
            phase = ?self.state.phase(),
            "key pressed"
        );
        self.state.display()
    }

    /// Maps a keyboard character and presses it
    pub fn press_key(&mut self, key: char) -> CalcResult<&str> {
        let event = InputEvent::from_key(key)?;
        Ok(self.press(event))
    }

    /// Presses every non-whitespace character of `keys` in order.
    ///
    /// Stops at the first unmapped character; keys before it stay applied.
    pub fn press_sequence(&mut self, keys: &str) -> CalcResult<&str> {
        for key in keys.chars().filter(|c| !c.is_whitespace()) {
            self.press_key(key)?;
        }
        Ok(self.state.display())
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.press(InputEvent::Clear);
    }

    /// Serializes the current state as JSON
    pub fn snapshot_json(&self) -> CalcResult<String> {
        serde_json::to_string(&self.state).map_err(|err| CalcError::snapshot(err.to_string()))
    }

    /// True if `event` would extend an operand already at the digit cap
    fn exceeds_digit_cap(&self, event: InputEvent) -> bool {
        let Some(max) = self.config.max_input_digits else {
            return false;
        };
        if !matches!(event, InputEvent::Digit(_)) || self.state.is_awaiting_new_operand() {
            return false;
        }
        let display = self.state.display();
        display != "0" && digit_count(display) >= max
    }
}
