//! Sequential evaluation state machine
//!
//! The pending operand and operator live in one `Option`, so one is never
//! set without the other.

use serde::{Deserialize, Serialize};

use crate::core::number::{accepts_decimal_point, accepts_digit, parse_operand, render};
use crate::core::{CalcError, Digit, InputEvent, Operator};

/// Display value of a fresh or cleared calculator
const INITIAL_DISPLAY: &str = "0";

/// An operator waiting for its right-hand operand
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingOperation {
    /// Left-hand operand, as it was displayed
    value: String,
    /// Operator to resolve on the next operator or equals press
    operator: Operator,
}

/// Interaction phase, derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Typing the first operand
    Idle,
    /// Equals was pressed; the display holds a result
    ShowingResult,
    /// An operator was pressed; the next digit starts the right operand
    OperatorPending,
    /// Typing the right-hand operand of a pending operation
    EnteringOperand,
}

/// Complete calculator state.
///
/// Every input event maps the current state to the next one in place.
/// Transitions are total: no event is ever rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRepr", into = "StateRepr")]
pub struct CalculatorState {
    /// Operand being edited, or the last result
    display: String,
    /// Operation in progress, if any
    pending: Option<PendingOperation>,
    /// Next digit starts a new operand instead of extending `display`
    awaiting_new_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            awaiting_new_operand: false,
        }
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the captured left-hand operand, if an operation is pending
    #[must_use]
    pub fn pending_value(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.value.as_str())
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Returns true if the next digit starts a new operand
    #[must_use]
    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Returns true if this is exactly the initial state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    /// Derives the interaction phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.pending, self.awaiting_new_operand) {
            (None, false) => Phase::Idle,
            (None, true) => Phase::ShowingResult,
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::EnteringOperand,
        }
    }

    /// Applies one input event
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Clear => self.clear(),
            InputEvent::Digit(d) => self.input_digit(d),
            InputEvent::DecimalPoint => self.input_decimal_point(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::Percent => self.input_percent(),
            InputEvent::Operator(op) => self.perform_operation(op),
            InputEvent::Equals => self.calculate_result(),
        }
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Starts or extends the operand with a digit.
    ///
    /// A lone `0` is replaced rather than extended, and so is a non-finite
    /// display such as `Infinity` left behind by percent.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_new_operand
            || self.display == INITIAL_DISPLAY
            || !accepts_digit(&self.display)
        {
            self.display = digit.as_char().to_string();
            self.awaiting_new_operand = false;
        } else {
            self.display.push(digit.as_char());
        }
    }

    /// Starts a `0.` operand, or appends a decimal point if there is none
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if accepts_decimal_point(&self.display) {
            self.display.push('.');
        }
    }

    /// Flips the leading minus sign, zero included
    pub fn toggle_sign(&mut self) {
        if let Some(unsigned) = self.display.strip_prefix('-') {
            self.display = unsigned.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Divides the displayed value by 100
    pub fn input_percent(&mut self) {
        self.display = render(parse_operand(&self.display) / 100.0);
    }

    /// Selects an operator, first resolving any operation already pending.
    ///
    /// Evaluation is strictly left to right: `2 + 3 × 4` is `(2 + 3) × 4`.
    /// Pressing operators back to back only swaps the pending operator, so
    /// `5 + × 2 =` is `10`, not `(5 + 5) × 2`.
    pub fn perform_operation(&mut self, operator: Operator) {
        let value = match self.pending.take() {
            None => self.display.clone(),
            Some(pending) if self.awaiting_new_operand && pending.value == self.display => {
                pending.value
            }
            Some(pending) => {
                let result = self.resolve(&pending);
                self.display.clone_from(&result);
                result
            }
        };
        self.pending = Some(PendingOperation { value, operator });
        self.awaiting_new_operand = true;
    }

    /// Resolves the pending operation against the display.
    ///
    /// Does nothing without a pending operation, so repeated presses after
    /// a result are ignored.
    pub fn calculate_result(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.display = self.resolve(&pending);
            self.awaiting_new_operand = true;
        }
    }

    /// Computes `pending.value <pending.operator> display` and renders it
    fn resolve(&self, pending: &PendingOperation) -> String {
        let previous = parse_operand(&pending.value);
        let current = parse_operand(&self.display);
        render(pending.operator.apply(previous, current))
    }

    /// Checks the data model invariants.
    ///
    /// Transitions preserve these; the check exists for states built from
    /// outside, such as deserialized snapshots.
    pub fn check_invariants(&self) -> Result<(), CalcError> {
        check_operand("display", &self.display)?;
        if let Some(pending) = &self.pending {
            check_operand("pending value", &pending.value)?;
        }
        Ok(())
    }
}

fn check_operand(field: &str, text: &str) -> Result<(), CalcError> {
    if text.is_empty() {
        return Err(CalcError::invalid_state(format!("{field} is empty")));
    }
    if text.matches('.').count() > 1 {
        return Err(CalcError::invalid_state(format!(
            "{field} {text:?} has more than one decimal point"
        )));
    }
    if text.parse::<f64>().is_err() {
        return Err(CalcError::invalid_state(format!(
            "{field} {text:?} is not a number"
        )));
    }
    Ok(())
}

/// Flat serialized form, one field per data model attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateRepr {
    display: String,
    pending_value: Option<String>,
    pending_operator: Option<Operator>,
    awaiting_new_operand: bool,
}

impl From<CalculatorState> for StateRepr {
    fn from(state: CalculatorState) -> Self {
        let (pending_value, pending_operator) = match state.pending {
            Some(p) => (Some(p.value), Some(p.operator)),
            None => (None, None),
        };
        Self {
            display: state.display,
            pending_value,
            pending_operator,
            awaiting_new_operand: state.awaiting_new_operand,
        }
    }
}

impl TryFrom<StateRepr> for CalculatorState {
    type Error = CalcError;

    fn try_from(repr: StateRepr) -> Result<Self, Self::Error> {
        let pending = match (repr.pending_value, repr.pending_operator) {
            (Some(value), Some(operator)) => Some(PendingOperation { value, operator }),
            (None, None) => None,
            _ => {
                return Err(CalcError::invalid_state(
                    "pending value and pending operator must be set together",
                ))
            }
        };
        let state = Self {
            display: repr.display,
            pending,
            awaiting_new_operand: repr.awaiting_new_operand,
        };
        state.check_invariants()?;
        Ok(state)
    }
}
