//! The four keypad operators

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operator selectable on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the keypad
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns the plain-keyboard symbol
    #[must_use]
    pub const fn ascii_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses either glyph set, plus `x`/`X` for multiply
    pub fn from_symbol(symbol: char) -> CalcResult<Self> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' | '−' => Ok(Self::Subtract),
            '*' | '×' | 'x' | 'X' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }

    /// Applies the operator with IEEE 754 semantics.
    ///
    /// Division by zero is not an error: it yields a signed infinity, or
    /// NaN for `0 / 0`.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
