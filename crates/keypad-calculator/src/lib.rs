//! Keypad Calculator - four-function calculator core
//!
//! A keypad front end forwards discrete input events (digits, decimal point,
//! operators, equals, sign toggle, percent, clear); the core keeps the
//! running computation and hands back the string to display.
//!
//! Evaluation is sequential with a single pending operation: each operator
//! press resolves the previous one, so `2 + 3 × 4 =` shows `20`.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_sequence("2 + 3 * 4 =").unwrap();
//! assert_eq!(calc.display(), "20");
//!
//! // Division by zero degrades instead of failing
//! calc.press_sequence("5 / 0 =").unwrap();
//! assert_eq!(calc.display(), "Infinity");
//!
//! // The keypad model tells the front end which operator key to light up
//! let keypad = Keypad::new();
//! keypad.press_label("×", &mut calc).unwrap();
//! let lit = keypad.highlighted(calc.active_operator()).unwrap();
//! assert_eq!(keypad.get_button(lit).unwrap().label, "×");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "keyboard")]
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::config::{CalculatorConfig, SymbolStyle};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorState, Digit, InputEvent, Operator, Phase,
    };
    pub use crate::driver::{CalculatorDriver, KeypadDriver, SessionDriver};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "keyboard")]
    pub use crate::input::{InputHandler, KeyAction};
}
