//! Keypad layout model
//!
//! The button grid a front end draws, as data: which label sits where and
//! which [`InputEvent`] it sends. Rendering is left to the front end.

use crate::calculator::Calculator;
use crate::config::{CalculatorConfig, SymbolStyle};
use crate::core::{CalcError, CalcResult, Digit, InputEvent, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: String,
    /// Event sent when the button is pressed
    pub event: InputEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    fn new(label: impl Into<String>, event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            label: label.into(),
            event,
            row,
            col,
            span: 1,
        }
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Returns true if the button covers grid cell `(row, col)`
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }

    /// Returns the operator this button selects, if it is an operator key
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match self.event {
            InputEvent::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns true if this is the key of the pending operator
    #[must_use]
    pub fn is_highlighted(&self, active: Option<Operator>) -> bool {
        active.is_some() && self.operator() == active
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [AC ] [+/-] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [   0     ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad with Unicode operator glyphs
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(SymbolStyle::Unicode)
    }

    /// Creates the keypad whose labels follow the configured symbols
    #[must_use]
    pub fn for_config(config: &CalculatorConfig) -> Self {
        Self::with_style(config.symbols)
    }

    /// Creates the standard keypad with the given operator glyphs
    #[must_use]
    pub fn with_style(style: SymbolStyle) -> Self {
        let op = |operator: Operator, row: usize| {
            KeypadButton::new(
                style.operator_label(operator).to_string(),
                InputEvent::Operator(operator),
                row,
                3,
            )
        };
        let digit = |value: u8, row: usize, col: usize| {
            let d = Digit::ALL[usize::from(value)];
            KeypadButton::new(d.as_char().to_string(), InputEvent::Digit(d), row, col)
        };

        let buttons = vec![
            // Row 0: AC +/- % ÷
            KeypadButton::new("AC", InputEvent::Clear, 0, 0),
            KeypadButton::new("+/-", InputEvent::ToggleSign, 0, 1),
            KeypadButton::new("%", InputEvent::Percent, 0, 2),
            op(Operator::Divide, 0),
            // Row 1: 7 8 9 ×
            digit(7, 1, 0),
            digit(8, 1, 1),
            digit(9, 1, 2),
            op(Operator::Multiply, 1),
            // Row 2: 4 5 6 −
            digit(4, 2, 0),
            digit(5, 2, 1),
            digit(6, 2, 2),
            op(Operator::Subtract, 2),
            // Row 3: 1 2 3 +
            digit(1, 3, 0),
            digit(2, 3, 1),
            digit(3, 3, 2),
            op(Operator::Add, 3),
            // Row 4: 0 (two columns) . =
            digit(0, 4, 0).wide(2),
            KeypadButton::new(".", InputEvent::DecimalPoint, 4, 2),
            KeypadButton::new("=", InputEvent::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering grid cell `(row, col)`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button that sends `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Removes the button sending `event`, leaving its cell empty
    #[must_use]
    pub fn without(mut self, event: InputEvent) -> Self {
        self.buttons.retain(|b| b.event != event);
        self
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns the index of the operator key to highlight
    #[must_use]
    pub fn highlighted(&self, active: Option<Operator>) -> Option<usize> {
        self.buttons.iter().position(|b| b.is_highlighted(active))
    }

    /// Presses the button at `index`
    pub fn press<'c>(&self, index: usize, calculator: &'c mut Calculator) -> CalcResult<&'c str> {
        let button = self
            .get_button(index)
            .ok_or_else(|| CalcError::unknown_button(format!("#{index}")))?;
        Ok(calculator.press(button.event))
    }

    /// Presses the button labelled `label`
    pub fn press_label<'c>(
        &self,
        label: &str,
        calculator: &'c mut Calculator,
    ) -> CalcResult<&'c str> {
        let index = self
            .find_button_by_label(label)
            .ok_or_else(|| CalcError::unknown_button(label))?;
        self.press(index, calculator)
    }

    /// Converts a position inside a `width` x `height` drawing area into
    /// the button drawn there
    #[must_use]
    pub fn hit_test(&self, width: u16, height: u16, x: u16, y: u16) -> Option<usize> {
        if x >= width || y >= height {
            return None;
        }

        let btn_width = width / self.cols as u16;
        let btn_height = height / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (x / btn_width) as usize;
        let row = (y / btn_height) as usize;
        self.buttons.iter().position(|b| b.covers(row, col))
    }
}
