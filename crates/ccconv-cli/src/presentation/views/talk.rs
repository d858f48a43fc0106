use crate::presentation::formatters::{first_line, format_compact, time, truncate};
use ccconv_engine::RecordKind;
use ccconv_types::Record;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::fmt;

const TOOL_RESULT_MAX_CHARS: usize = 200;

/// Conversation transcript: a `[HH:MM:SS] Role` header per record, then its content
pub struct TalkView<'a> {
    records: &'a [Record],
    enable_color: bool,
}

impl<'a> TalkView<'a> {
    pub fn new(records: &'a [Record], enable_color: bool) -> Self {
        Self {
            records,
            enable_color,
        }
    }

    fn header(&self, record: &Record) -> String {
        let clock = record
            .timestamp()
            .map(time::format_clock)
            .unwrap_or_else(|| "--:--:--".to_string());

        let kind = RecordKind::of(record.value());
        let label = match kind {
            RecordKind::UserInput => "User",
            RecordKind::ToolResult => "Tool result",
            RecordKind::Assistant => "Assistant",
            RecordKind::Other(Some(other)) => other,
            RecordKind::Other(None) => "unknown",
        };

        if !self.enable_color {
            return format!("[{}] {}", clock, label);
        }

        let label = match kind {
            RecordKind::UserInput => label.green().bold().to_string(),
            RecordKind::ToolResult => label.yellow().to_string(),
            RecordKind::Assistant => label.cyan().bold().to_string(),
            RecordKind::Other(_) => label.dimmed().to_string(),
        };
        let stamp = format!("[{}]", clock);
        format!("{} {}", stamp.dimmed(), label)
    }
}

impl fmt::Display for TalkView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", self.header(record))?;
            for line in content_lines(record.content()) {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

fn content_lines(content: Option<&Value>) -> Vec<String> {
    match content {
        Some(Value::String(text)) => vec![text.clone()],
        Some(Value::Array(items)) => items.iter().filter_map(item_line).collect(),
        Some(item @ Value::Object(_)) => item_line(item).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn item_line(item: &Value) -> Option<String> {
    let field = |key: &str| item.get(key).and_then(Value::as_str);

    match field("type")? {
        "text" => field("text").map(str::to_string),
        "thinking" => field("thinking").map(|text| format!("(thinking) {}", text)),
        "tool_use" => {
            let input = item.get("input").map(format_compact).unwrap_or_default();
            let line = format!("→ {} {}", field("name").unwrap_or("tool"), input);
            Some(line.trim_end().to_string())
        }
        "tool_result" => {
            let text = tool_result_text(item.get("content"));
            Some(format!(
                "← {}",
                truncate(first_line(&text), TOOL_RESULT_MAX_CHARS)
            ))
        }
        _ => None,
    }
}

fn tool_result_text(content: Option<&Value>) -> String {
    match content {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
