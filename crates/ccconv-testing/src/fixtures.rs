//! Builders for Claude Code log records.
//!
//! Every builder stamps `sessionId`, `cwd` and `gitBranch` the way the
//! Claude Code CLI does. The `*_at` variants take an explicit timestamp; the
//! plain ones use "now" so the records land inside the default `--since`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

pub const SESSION_ID: &str = "8f1c2a9e-0000-4000-8000-000000000001";
pub const CWD: &str = "/Users/me/work/app";
pub const GIT_BRANCH: &str = "main";

pub fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn envelope(kind: &str, at: DateTime<Utc>, message: Value) -> Value {
    json!({
        "type": kind,
        "timestamp": stamp(at),
        "sessionId": SESSION_ID,
        "cwd": CWD,
        "gitBranch": GIT_BRANCH,
        "message": message,
    })
}

pub fn user_message_at(at: DateTime<Utc>, text: &str) -> Value {
    envelope("user", at, json!({"role": "user", "content": text}))
}

pub fn user_message(text: &str) -> Value {
    user_message_at(Utc::now(), text)
}

pub fn assistant_message_at(
    at: DateTime<Utc>,
    text: &str,
    input_tokens: u64,
    output_tokens: u64,
) -> Value {
    envelope(
        "assistant",
        at,
        json!({
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "usage": {
                "input_tokens": input_tokens,
                "output_tokens": output_tokens,
                "cache_creation_input_tokens": 0,
                "cache_read_input_tokens": 0
            }
        }),
    )
}

pub fn assistant_message(text: &str, input_tokens: u64, output_tokens: u64) -> Value {
    assistant_message_at(Utc::now(), text, input_tokens, output_tokens)
}

pub fn tool_use_at(at: DateTime<Utc>, name: &str, input: Value) -> Value {
    envelope(
        "assistant",
        at,
        json!({
            "role": "assistant",
            "content": [{"type": "tool_use", "id": "toolu_01", "name": name, "input": input}]
        }),
    )
}

pub fn tool_use(name: &str, input: Value) -> Value {
    tool_use_at(Utc::now(), name, input)
}

pub fn tool_result_at(at: DateTime<Utc>, output: &str) -> Value {
    envelope(
        "user",
        at,
        json!({
            "role": "user",
            "content": [{"type": "tool_result", "tool_use_id": "toolu_01", "content": output}]
        }),
    )
}

pub fn tool_result(output: &str) -> Value {
    tool_result_at(Utc::now(), output)
}

/// Session summary line; carries no timestamp
pub fn summary(text: &str) -> Value {
    json!({"type": "summary", "summary": text, "leafUuid": "leaf-1"})
}
