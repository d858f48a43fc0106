use super::UsageStats;
use crate::since::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Where a record was loaded from. Not part of the record's own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub file_path: PathBuf,
    pub project_dir: String,
    pub file_name: String,
}

impl Provenance {
    pub fn new(file_path: impl Into<PathBuf>, project_dir: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file_path,
            project_dir: project_dir.into(),
            file_name,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// One parsed log line.
///
/// Every field is optional; accessors return `None` rather than failing when
/// a field is missing or has an unexpected shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    value: Value,
    provenance: Provenance,
}

impl Record {
    pub fn new(value: Value, provenance: Provenance) -> Self {
        Self { value, provenance }
    }

    /// The record as it appeared in the log
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn record_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.str_field("timestamp").and_then(parse_timestamp)
    }

    pub fn cwd(&self) -> Option<&str> {
        self.str_field("cwd")
    }

    pub fn git_branch(&self) -> Option<&str> {
        self.str_field("gitBranch")
    }

    pub fn message(&self) -> Option<&Value> {
        self.value.get("message")
    }

    pub fn content(&self) -> Option<&Value> {
        self.message()?.get("content")
    }

    pub fn usage(&self) -> Option<UsageStats> {
        self.message()?.get("usage").map(UsageStats::from_value)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(Value::as_str)
    }
}

/// Records serialize as their own fields followed by `_filePath`,
/// `_projectDir` and `_fileName`.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(fields) = self.value.as_object() else {
            return self.value.serialize(serializer);
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 3))?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("_filePath", &self.provenance.file_path)?;
        map.serialize_entry("_projectDir", &self.provenance.project_dir)?;
        map.serialize_entry("_fileName", &self.provenance.file_name)?;
        map.end()
    }
}
