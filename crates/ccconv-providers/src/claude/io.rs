use crate::{Error, Result};
use ccconv_types::{LogFile, Provenance, Record};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;

/// Read a log file and parse every line into a record.
///
/// Lines that are not JSON objects are skipped; they still count towards
/// `line_count`.
pub fn read_log_file(path: &Path, project_dir: &str) -> Result<LogFile> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
    let modified = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .map_err(|e| Error::io(path, e))?;
    // Lines with invalid UTF-8 must not cost the rest of the file
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);

    let provenance = Provenance::new(path, project_dir);
    let file_name = provenance.file_name.clone();

    Ok(LogFile {
        path: path.to_path_buf(),
        file_name,
        modified,
        size: metadata.len(),
        line_count: count_lines(&text),
        records: parse_records(&text, &provenance),
    })
}

/// Modification time without reading the file
pub fn modified_at(path: &Path) -> Result<DateTime<Utc>> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .map_err(|e| Error::io(path, e))
}

pub fn parse_records(text: &str, provenance: &Provenance) -> Vec<Record> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match serde_json::from_str::<Value>(line) {
            Ok(value @ Value::Object(_)) => Some(Record::new(value, provenance.clone())),
            Ok(_) => {
                tracing::debug!(
                    file = %provenance.file_path.display(),
                    line = index + 1,
                    "skipping non-object line"
                );
                None
            }
            Err(err) => {
                tracing::debug!(
                    file = %provenance.file_path.display(),
                    line = index + 1,
                    error = %err,
                    "skipping malformed line"
                );
                None
            }
        })
        .collect()
}

pub fn count_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
