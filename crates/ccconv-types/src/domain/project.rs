use super::Record;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A loaded `.jsonl` log file
#[derive(Debug, Clone, PartialEq)]
pub struct LogFile {
    pub path: PathBuf,
    pub file_name: String,
    pub modified: DateTime<Utc>,
    pub size: u64,
    /// Non-empty lines on disk, malformed ones included
    pub line_count: usize,
    pub records: Vec<Record>,
}

/// A project directory under the log root with its loaded log files
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLog {
    /// Directory name, e.g. `-Users-me-work-app`
    pub name: String,
    pub path: PathBuf,
    pub files: Vec<LogFile>,
}

impl ProjectLog {
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.files.iter().flat_map(|file| file.records.iter())
    }
}
