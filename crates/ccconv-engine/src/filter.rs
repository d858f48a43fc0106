use crate::classify::is_tool_result;
use ccconv_types::{Record, Since, TypeFilter};
use serde_json::Value;

/// Category policy for `--type`.
///
/// Tool results are logged as `user` records, so `assistant` pulls them back
/// in while plain `user` leaves them out; `userandtools` keeps every `user`
/// record.
pub fn matches_type(filter: &TypeFilter, record: &Value) -> bool {
    let record_type = record.get("type").and_then(Value::as_str);

    match filter {
        TypeFilter::User => record_type == Some("user") && !is_tool_result(record),
        TypeFilter::UserAndTools => record_type == Some("user"),
        TypeFilter::Assistant => {
            record_type == Some("assistant")
                || (record_type == Some("user") && is_tool_result(record))
        }
        TypeFilter::Exact(wanted) => record_type == Some(wanted.as_str()),
    }
}

/// Keep the records in `filter`'s category; no filter keeps everything
pub fn filter_by_type(records: Vec<Record>, filter: Option<&TypeFilter>) -> Vec<Record> {
    match filter {
        None => records,
        Some(filter) => records
            .into_iter()
            .filter(|record| matches_type(filter, record.value()))
            .collect(),
    }
}

/// Keep the records whose `timestamp` is at or after the bound
pub fn filter_by_since(records: Vec<Record>, since: &Since) -> Vec<Record> {
    if *since == Since::All {
        return records;
    }

    records
        .into_iter()
        .filter(|record| since.includes(record.timestamp()))
        .collect()
}
