use super::text::truncate;
use serde_json::Value;

const MAX_FIELD_CHARS: usize = 50;

/// Strings as-is, everything else as compact JSON
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One-line rendering of a tool input: `key: value, ...` with long
/// strings shortened and nested values elided.
pub fn format_compact(value: &Value) -> String {
    let Some(obj) = value.as_object() else {
        return value.to_string();
    };

    let pairs: Vec<String> = obj
        .iter()
        .map(|(k, v)| {
            let value_str = match v {
                Value::String(s) => Value::String(truncate(s, MAX_FIELD_CHARS)).to_string(),
                Value::Array(_) => "[...]".to_string(),
                Value::Object(_) => "{...}".to_string(),
                other => other.to_string(),
            };
            format!("{}: {}", k, value_str)
        })
        .collect();

    if pairs.is_empty() {
        "{}".to_string()
    } else {
        pairs.join(", ")
    }
}
