//! Assertions over the JSON printed by `raws` and `projects --json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn as_array(json: &Value) -> Result<&Vec<Value>> {
    json.as_array().context("Expected a JSON array on stdout")
}

pub fn assert_len(json: &Value, expected: usize) -> Result<()> {
    let items = as_array(json)?;
    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}: {}", expected, items.len(), json);
    }
    Ok(())
}

/// Every record's `type` is one of `allowed`.
pub fn assert_types_within(json: &Value, allowed: &[&str]) -> Result<()> {
    for (i, record) in as_array(json)?.iter().enumerate() {
        let kind = record["type"]
            .as_str()
            .with_context(|| format!("Record {} has no type", i))?;
        if !allowed.contains(&kind) {
            anyhow::bail!("Record {} has type {}, expected one of {:?}", i, kind, allowed);
        }
    }
    Ok(())
}

/// No record carries a `tool_result` item in `message.content`.
pub fn assert_no_tool_results(json: &Value) -> Result<()> {
    for (i, record) in as_array(json)?.iter().enumerate() {
        let has_result = record["message"]["content"]
            .as_array()
            .is_some_and(|items| items.iter().any(|item| item["type"] == "tool_result"));
        if has_result {
            anyhow::bail!("Record {} is a tool result: {}", i, record);
        }
    }
    Ok(())
}

/// Every record carries the `_filePath`/`_projectDir`/`_fileName` keys.
pub fn assert_has_provenance(json: &Value) -> Result<()> {
    for (i, record) in as_array(json)?.iter().enumerate() {
        for key in ["_filePath", "_projectDir", "_fileName"] {
            if !record[key].is_string() {
                anyhow::bail!("Record {} is missing {}", i, key);
            }
        }
    }
    Ok(())
}

/// Project summaries appear with exactly these names, in this order.
pub fn assert_project_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = as_array(json)?
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    if names != expected {
        anyhow::bail!("Expected projects {:?}, got {:?}", expected, names);
    }
    Ok(())
}
