//! Scalar coercion helpers
//!
//! Shared between the decoder and the encoder: converting between XML text
//! and native JSON scalars when coercion is enabled.

use serde_json::{Number, Value};

/// Try to convert a string to an integer, float, or boolean.
///
/// Integers are probed before floats so that `"10"` decodes to the integer
/// `10` and re-renders as `"10"` rather than `"10.0"`. Booleans match
/// case-insensitively. Anything else is returned as a string unchanged.
pub fn parse_scalar(text: &str) -> Value {
    if let Ok(int) = text.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = text.parse::<f64>() {
        // NaN and infinities have no JSON representation and stay strings
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(text.to_string())
}

/// Render a scalar value as XML text.
///
/// Integers and floats use their default decimal rendering, booleans render
/// lowercase, strings pass through. Returns `None` for nulls, arrays and
/// objects, which have no text form.
pub fn stringify_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(if *flag { "true" } else { "false" }.to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
