//! Loose scalar handling for generator output.
//!
//! The generator is free to send `"8"` or `8` for the same field, so display
//! text is derived from raw JSON values. Truthiness follows the
//! rules of the service's JavaScript clients: `null`, `false`, `0` and `""`
//! count as absent.

use serde_json::{Number, Value};

/// Text used when an optional field is absent or falsy.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text for a field with a fallback.
pub fn text_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(v) if is_truthy(v) => display_text(v),
        _ => fallback.to_string(),
    }
}

/// Display text for a field shown verbatim. Absent values print as nothing.
pub fn verbatim_text(value: Option<&Value>) -> String {
    value.map(display_text).unwrap_or_default()
}

/// Converts any JSON value to the text a user would expect to read.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral floats print without a fractional part (`8.0` → `8`).
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
