//! Unified calculator drivers
//!
//! Write a key scenario once and run it against every way of feeding the
//! calculator: straight keyboard characters, or clicks on keypad buttons.
//! The `verify_*` functions are those shared scenarios; they panic on the
//! first mismatch, like any assertion.

use crate::calculator::Calculator;
use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, CalculatorState, InputEvent, Operator};
use crate::keypad::Keypad;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{verify_chained_operations, KeypadDriver};
///
/// let mut driver = KeypadDriver::new();
/// verify_chained_operations(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses every non-whitespace keyboard character of `keys`
    fn press_keys(&mut self, keys: &str) -> CalcResult<()>;

    /// Gets the current display
    fn display(&self) -> String;

    /// Gets the operator the front end highlights
    fn active_operator(&self) -> Option<Operator>;

    /// Gets the full state
    fn state(&self) -> CalculatorState;

    /// Resets the calculator
    fn clear(&mut self);
}

/// Driver that types keyboard characters into a session
#[derive(Debug, Default)]
pub struct SessionDriver {
    calculator: Calculator,
}

impl SessionDriver {
    /// Creates a new session driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session driver with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for SessionDriver {
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        self.calculator.press_sequence(keys).map(|_| ())
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.calculator.active_operator()
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }
}

/// Driver that resolves each key to a keypad button and clicks it
#[derive(Debug, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    calculator: Calculator,
}

impl KeypadDriver {
    /// Creates a new keypad driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a keypad driver whose keypad follows `config`
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            keypad: Keypad::for_config(&config),
            calculator: Calculator::with_config(config),
        }
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the label of the highlighted operator key, if any
    #[must_use]
    pub fn highlighted_label(&self) -> Option<&str> {
        self.keypad
            .highlighted(self.calculator.active_operator())
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|b| b.label.as_str())
    }

    fn click(&mut self, key: char) -> CalcResult<()> {
        let event = InputEvent::from_key(key)?;
        let index = self
            .keypad
            .find_button_by_event(event)
            .ok_or_else(|| CalcError::unknown_button(event.label()))?;
        self.keypad.press(index, &mut self.calculator)?;
        Ok(())
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .try_for_each(|key| self.click(key))
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.calculator.active_operator()
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }

    fn clear(&mut self) {
        let pressed = self
            .keypad
            .find_button_by_event(InputEvent::Clear)
            .map(|index| self.keypad.press(index, &mut self.calculator).map(|_| ()));
        if !matches!(pressed, Some(Ok(()))) {
            self.calculator.clear();
        }
    }
}

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Clears, presses `keys`, and asserts the display
fn expect_display<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    driver.clear();
    let pressed = driver.press_keys(keys);
    assert!(pressed.is_ok(), "pressing {keys:?} failed: {pressed:?}");
    assert_eq!(driver.display(), expected, "after {keys:?}");
}

/// Verifies digit entry and leading-zero suppression
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "123", "123");
    expect_display(driver, "0007", "7");
    expect_display(driver, "10", "10");
    expect_display(driver, "..", "0.");
    expect_display(driver, "5..5", "5.5");
}

/// Verifies sign toggling and percent
pub fn verify_sign_and_percent<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "42n", "-42");
    expect_display(driver, "42nn", "42");
    expect_display(driver, "n", "-0");
    expect_display(driver, "50%", "0.5");
}

/// Verifies strictly left-to-right evaluation
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "1+2+3=", "6");
    expect_display(driver, "9*9=", "81");
    expect_display(driver, "2+3*4=", "20");
    expect_display(driver, "5.5+.5=", "6");
}

/// Verifies division by zero degrades to non-finite displays
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5/0=", "Infinity");
    expect_display(driver, "5n/0=", "-Infinity");
    expect_display(driver, "0/0=", "NaN");
}

/// Verifies the operator highlight and repeated equals
pub fn verify_operator_highlight<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "7-", "7");
    assert_eq!(driver.active_operator(), Some(Operator::Subtract));
    expect_display(driver, "7-*", "7");
    assert_eq!(driver.active_operator(), Some(Operator::Multiply));
    expect_display(driver, "7-2==", "5");
    assert_eq!(driver.active_operator(), None);
}

/// Verifies clear restores the initial state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    for keys in ["", "12.5", "3+", "3+4", "8/0=", "1n%"] {
        driver.clear();
        let pressed = driver.press_keys(keys);
        assert!(pressed.is_ok(), "pressing {keys:?} failed: {pressed:?}");
        driver.clear();
        assert!(driver.state().is_initial(), "clear after {keys:?}");
    }
}

/// Runs every shared scenario in turn
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_sign_and_percent(driver);
    verify_chained_operations(driver);
    verify_division_by_zero(driver);
    verify_operator_highlight(driver);
    verify_clear(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SymbolStyle;

    // ===== SessionDriver tests =====

    #[test]
    fn test_session_driver_new() {
        let driver = SessionDriver::new();
        assert_eq!(driver.display(), "0");
        assert!(driver.calculator().state().is_initial());
    }

    #[test]
    fn test_session_driver_press_keys() {
        let mut driver = SessionDriver::new();
        driver.press_keys("6 * 7 =").unwrap();
        assert_eq!(driver.display(), "42");
    }

    #[test]
    fn test_session_driver_with_config() {
        let mut driver = SessionDriver::with_config(CalculatorConfig::new().with_max_input_digits(2));
        driver.press_keys("123").unwrap();
        assert_eq!(driver.display(), "12");
    }

    #[test]
    fn test_session_driver_bad_key() {
        let mut driver = SessionDriver::new();
        assert_eq!(driver.press_keys("1^2"), Err(CalcError::UnmappedKey('^')));
    }

    // ===== KeypadDriver tests =====

    #[test]
    fn test_keypad_driver_new() {
        let driver = KeypadDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.keypad().button_count(), 19);
    }

    #[test]
    fn test_keypad_driver_press_keys() {
        let mut driver = KeypadDriver::new();
        driver.press_keys("12-2=").unwrap();
        assert_eq!(driver.display(), "10");
    }

    #[test]
    fn test_keypad_driver_highlighted_label() {
        let mut driver = KeypadDriver::new();
        assert_eq!(driver.highlighted_label(), None);
        driver.press_keys("3/").unwrap();
        assert_eq!(driver.highlighted_label(), Some("÷"));
    }

    #[test]
    fn test_keypad_driver_ascii_labels() {
        let mut driver =
            KeypadDriver::with_config(CalculatorConfig::new().with_symbols(SymbolStyle::Ascii));
        driver.press_keys("3/").unwrap();
        assert_eq!(driver.highlighted_label(), Some("/"));
    }

    #[test]
    fn test_keypad_driver_clear() {
        let mut driver = KeypadDriver::new();
        driver.press_keys("3/").unwrap();
        driver.clear();
        assert!(driver.state().is_initial());
    }

    #[test]
    fn test_keypad_driver_clear_without_ac_button() {
        let mut driver = KeypadDriver {
            keypad: Keypad::new().without(InputEvent::Clear),
            calculator: Calculator::new(),
        };
        driver.press_keys("3/4").unwrap();
        driver.clear();
        assert!(driver.state().is_initial());
    }

    // ===== Unified scenario tests =====

    #[test]
    fn test_all_scenarios_session() {
        run_all_scenarios(&mut SessionDriver::new());
    }

    #[test]
    fn test_all_scenarios_keypad() {
        run_all_scenarios(&mut KeypadDriver::new());
    }
}
