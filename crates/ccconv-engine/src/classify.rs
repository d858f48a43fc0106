use serde_json::Value;

const TOOL_RESULT: &str = "tool_result";

/// Whether a record's `message.content` is, or contains, a `tool_result` item.
pub fn is_tool_result(record: &Value) -> bool {
    match record.get("message").and_then(|m| m.get("content")) {
        Some(Value::Array(items)) => items.iter().any(is_tool_result_item),
        Some(item @ Value::Object(_)) => is_tool_result_item(item),
        _ => false,
    }
}

fn is_tool_result_item(item: &Value) -> bool {
    item.get("type").and_then(Value::as_str) == Some(TOOL_RESULT)
}

/// Conversational role of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind<'a> {
    /// `user` record typed by the person at the keyboard
    UserInput,
    /// `user` record carrying the output of a tool call
    ToolResult,
    Assistant,
    /// any other `type`, or none
    Other(Option<&'a str>),
}

impl<'a> RecordKind<'a> {
    pub fn of(record: &'a Value) -> Self {
        match record.get("type").and_then(Value::as_str) {
            Some("user") if is_tool_result(record) => RecordKind::ToolResult,
            Some("user") => RecordKind::UserInput,
            Some("assistant") => RecordKind::Assistant,
            other => RecordKind::Other(other),
        }
    }
}
