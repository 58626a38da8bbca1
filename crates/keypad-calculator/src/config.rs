//! Calculator configuration

use serde::{Deserialize, Serialize};

use crate::core::{CalcResult, Operator};

/// Which glyphs the keypad shows for operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    /// `+ − × ÷`
    #[default]
    Unicode,
    /// `+ - * /`
    Ascii,
}

impl SymbolStyle {
    /// Returns the label for an operator in this style
    #[must_use]
    pub const fn operator_label(self, op: Operator) -> char {
        match self {
            Self::Unicode => op.symbol(),
            Self::Ascii => op.ascii_symbol(),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Operator glyphs on the keypad
    pub symbols: SymbolStyle,
    /// Longest operand that can be typed, in digits (`None` = unbounded)
    pub max_input_digits: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            symbols: SymbolStyle::Unicode,
            max_input_digits: None,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set operator symbol style
    #[must_use]
    pub const fn with_symbols(mut self, symbols: SymbolStyle) -> Self {
        self.symbols = symbols;
        self
    }

    /// Cap typed operands at `digits` digits
    #[must_use]
    pub const fn with_max_input_digits(mut self, digits: usize) -> Self {
        self.max_input_digits = Some(digits);
        self
    }

    /// Parse configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize configuration to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
