use crate::interpreter::value::core::Value;

/// Converts a raw stored value into the most specific numeric value it
/// represents.
///
/// Strings are tried as an integer first, then as a real number; if neither
/// parse succeeds the string is returned unchanged. Every other value passes
/// through untouched. Coercion never fails.
///
/// The order matters: `"3"` becomes `Integer(3)` while `"3.0"` becomes
/// `Real(3.0)`.
///
/// # Example
/// ```
/// use propexpr::interpreter::value::{coerce::coerce, core::Value};
///
/// assert_eq!(coerce("42".into()), Value::Integer(42));
/// assert_eq!(coerce("3.14".into()), Value::Real(3.14));
/// assert_eq!(coerce("abc".into()), Value::from("abc"));
/// assert_eq!(coerce(Value::Bool(true)), Value::Bool(true));
/// ```
#[must_use]
pub fn coerce(raw: Value) -> Value {
    match raw {
        Value::Str(text) => {
            if let Ok(integer) = text.parse::<i64>() {
                Value::Integer(integer)
            } else if let Some(real) = parse_real(&text) {
                Value::Real(real)
            } else {
                Value::Str(text)
            }
        },
        other => other,
    }
}

/// Parses a decimal floating-point number.
///
/// Surrounding whitespace is ignored. Besides plain decimal and exponent
/// notation, only the spellings `NaN` and `Infinity` (optionally signed) are
/// accepted for the special values; `inf` or `nan` in any other spelling
/// stay text.
///
/// # Example
/// ```
/// use propexpr::interpreter::value::coerce::parse_real;
///
/// assert_eq!(parse_real(" 2.5 "), Some(2.5));
/// assert_eq!(parse_real("1e3"), Some(1000.0));
/// assert_eq!(parse_real("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_real("inf"), None);
/// assert_eq!(parse_real("1,5"), None);
/// ```
#[must_use]
pub fn parse_real(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    match trimmed.trim_start_matches(['+', '-']) {
        "NaN" | "Infinity" => trimmed.replace("Infinity", "inf").parse().ok(),
        digits if !digits.is_empty()
                  && digits.chars()
                           .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            trimmed.parse().ok()
        },
        _ => None,
    }
}
