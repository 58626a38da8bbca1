//! Discrete input events forwarded by the keypad

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operator};

/// A single decimal digit, guaranteed to be in 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All ten digits, indexed by value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Validates a digit value
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Input events accepted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// AC: reset to the initial state
    Clear,
    /// A digit key
    Digit(Digit),
    /// The decimal point key
    DecimalPoint,
    /// The +/- key
    ToggleSign,
    /// The % key
    Percent,
    /// One of the four operator keys
    Operator(Operator),
    /// The = key
    Equals,
}

impl InputEvent {
    /// Convenience constructor for digit events
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Maps a keyboard character to an event.
    ///
    /// Enter arrives as `'\n'` or `'\r'` and means equals. `n` and `_`
    /// toggle the sign since `-` is taken by subtraction.
    pub fn from_key(key: char) -> CalcResult<Self> {
        if let Some(d) = Digit::from_char(key) {
            return Ok(Self::Digit(d));
        }
        match key {
            '.' | ',' => Ok(Self::DecimalPoint),
            '%' => Ok(Self::Percent),
            '=' | '\n' | '\r' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            'n' | 'N' | '_' => Ok(Self::ToggleSign),
            other => Operator::from_symbol(other)
                .map(Self::Operator)
                .map_err(|_| CalcError::UnmappedKey(other)),
        }
    }

    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Clear => "AC".to_string(),
            Self::Digit(d) => d.as_char().to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl From<Operator> for InputEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Digit> for InputEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Digit tests =====

    #[test]
    fn test_digit_new_valid() {
        for v in 0..=9 {
            assert_eq!(Digit::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn test_digit_new_invalid() {
        assert_eq!(Digit::new(10), Err(CalcError::InvalidDigit(10)));
        assert!(Digit::new(255).is_err());
    }

    #[test]
    fn test_digit_all_indexed_by_value() {
        for (i, d) in Digit::ALL.iter().enumerate() {
            assert_eq!(usize::from(d.value()), i);
        }
    }

    #[test]
    fn test_digit_as_char() {
        assert_eq!(Digit::new(0).unwrap().as_char(), '0');
        assert_eq!(Digit::new(7).unwrap().as_char(), '7');
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('3'), Some(Digit(3)));
        assert_eq!(Digit::from_char('a'), None);
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&Digit(4)).unwrap(), "4");
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    // ===== InputEvent::from_key tests =====

    #[test]
    fn test_from_key_digits() {
        assert_eq!(
            InputEvent::from_key('5').unwrap(),
            InputEvent::digit(5).unwrap()
        );
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            InputEvent::from_key('+').unwrap(),
            InputEvent::Operator(Operator::Add)
        );
        assert_eq!(
            InputEvent::from_key('÷').unwrap(),
            InputEvent::Operator(Operator::Divide)
        );
        assert_eq!(
            InputEvent::from_key('x').unwrap(),
            InputEvent::Operator(Operator::Multiply)
        );
    }

    #[test]
    fn test_from_key_specials() {
        assert_eq!(InputEvent::from_key('.').unwrap(), InputEvent::DecimalPoint);
        assert_eq!(InputEvent::from_key('%').unwrap(), InputEvent::Percent);
        assert_eq!(InputEvent::from_key('=').unwrap(), InputEvent::Equals);
        assert_eq!(InputEvent::from_key('\n').unwrap(), InputEvent::Equals);
        assert_eq!(InputEvent::from_key('C').unwrap(), InputEvent::Clear);
        assert_eq!(InputEvent::from_key('n').unwrap(), InputEvent::ToggleSign);
    }

    #[test]
    fn test_from_key_unmapped() {
        assert_eq!(
            InputEvent::from_key('('),
            Err(CalcError::UnmappedKey('('))
        );
        assert_eq!(InputEvent::from_key('^'), Err(CalcError::UnmappedKey('^')));
    }

    // ===== Label tests =====

    #[test]
    fn test_event_labels() {
        assert_eq!(InputEvent::Clear.label(), "AC");
        assert_eq!(InputEvent::ToggleSign.label(), "+/-");
        assert_eq!(InputEvent::Percent.label(), "%");
        assert_eq!(InputEvent::Equals.label(), "=");
        assert_eq!(InputEvent::DecimalPoint.label(), ".");
        assert_eq!(InputEvent::digit(0).unwrap().label(), "0");
        assert_eq!(InputEvent::Operator(Operator::Multiply).label(), "×");
    }

    #[test]
    fn test_event_from_conversions() {
        assert_eq!(
            InputEvent::from(Operator::Add),
            InputEvent::Operator(Operator::Add)
        );
        assert_eq!(
            InputEvent::from(Digit(2)),
            InputEvent::digit(2).unwrap()
        );
    }
}
