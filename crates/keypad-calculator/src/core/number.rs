//! Conversion between display strings and floating point operands.
//!
//! The display is always text. Arithmetic happens on `f64` and results are
//! rendered back to the shortest string that parses to the same value.

/// Smallest magnitude rendered without an exponent
const MIN_PLAIN_MAGNITUDE: f64 = 1e-6;

/// Magnitude from which results switch to exponent form
const MAX_PLAIN_MAGNITUDE: f64 = 1e21;

/// Parses a display string into an operand.
///
/// Accepts everything the display can hold: plain numerals (`"5."`,
/// `"-0"`), exponent forms (`"1e+21"`) and the non-finite texts
/// (`"Infinity"`, `"-Infinity"`, `"NaN"`).
///
/// A display that does not parse is a bug in the state machine. Debug
/// builds assert; release builds log the defect and yield NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let parsed = text.parse::<f64>();
    debug_assert!(parsed.is_ok(), "display {text:?} is not a number");
    parsed.unwrap_or_else(|err| {
        tracing::error!(display = text, error = %err, "unparseable display, using NaN");
        f64::NAN
    })
}

/// Renders a computed value for the display.
///
/// Whole numbers carry no fractional part, negative zero shows as `0`,
/// and non-finite values become `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn render(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (MIN_PLAIN_MAGNITUDE..MAX_PLAIN_MAGNITUDE).contains(&magnitude) {
        return format!("{value}");
    }

    // `{:e}` omits the sign of positive exponents
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

/// Returns true if `text` is a numeral as typed on the keypad: an optional
/// leading `-`, then digits with at most one decimal point.
#[must_use]
pub fn is_plain_numeral(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.matches('.').count() <= 1
}

/// Returns true if a decimal point may be appended to `text`
#[must_use]
pub fn accepts_decimal_point(text: &str) -> bool {
    is_plain_numeral(text) && !text.contains('.')
}

/// Returns true if a typed digit may extend `text`.
///
/// Plain numerals and finite exponent forms can grow; `Infinity`, `NaN`
/// and their negations cannot, so a digit starts a new operand instead.
#[must_use]
pub fn accepts_digit(text: &str) -> bool {
    is_plain_numeral(text) || text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Counts the digits in a display string
#[must_use]
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}
