use serde_json::Value;

/// Best-effort numeric coercion shared by all transformers.
///
/// Null, booleans, empty strings, and non-numeric strings yield `default`;
/// anything that parses as a number yields the parsed value.
pub fn safe_number(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(default),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                default
            } else {
                trimmed.parse::<f64>().unwrap_or(default)
            }
        }
        _ => default,
    }
}

/// Wraps a float into a JSON number, using an integer representation when the
/// value is integral so `10.0` serializes as `10` rather than `10.0`.
pub fn number_value(value: f64) -> Value {
    if value.is_finite()
        && value.fract() == 0.0
        && (i64::MIN as f64..=i64::MAX as f64).contains(&value)
    {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// JavaScript-style truthiness, kept for parity with the platform exports this
/// crate ingests: null, `false`, `0`, and `""` are falsy, everything else is
/// truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringifies a scalar value the way `String(x)` would: strings pass through
/// unquoted, numbers and booleans use their JSON rendering.
pub fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
