use crate::presentation::formatters::{format_kib, format_thousands, time};
use ccconv_types::{LogFile, UsageStats};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

/// One log file touched today
#[derive(Debug, Clone)]
pub struct TodayFile {
    pub project: String,
    pub file_name: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub usage: UsageStats,
    pub line_count: usize,
}

impl TodayFile {
    pub fn new(project: &str, file: &LogFile) -> Self {
        let usage = file
            .records
            .iter()
            .filter_map(|record| record.usage())
            .fold(UsageStats::default(), |acc, usage| acc + usage);

        Self {
            project: project.to_string(),
            file_name: file.file_name.clone(),
            size: file.size,
            modified: file.modified,
            usage,
            line_count: file.line_count,
        }
    }
}

pub struct TodayView {
    date: NaiveDate,
    files: Vec<TodayFile>,
}

impl TodayView {
    pub fn new(date: NaiveDate, files: Vec<TodayFile>) -> Self {
        Self { date, files }
    }
}

impl fmt::Display for TodayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.files.is_empty() {
            return writeln!(f, "No log files updated today");
        }

        writeln!(f, "Log files updated today ({}):", self.date)?;
        writeln!(f)?;

        for file in &self.files {
            writeln!(f, "📁 {}", file.project)?;
            writeln!(f, "   📄 {}", file.file_name)?;
            writeln!(f, "   📊 Size: {}KB", format_kib(file.size))?;
            writeln!(f, "   🕐 Updated: {}", time::format_local(file.modified))?;
            if file.usage.input_tokens > 0 || file.usage.output_tokens > 0 {
                writeln!(
                    f,
                    "   🎯 Tokens: input={}, output={}",
                    format_thousands(file.usage.input_tokens),
                    format_thousands(file.usage.output_tokens)
                )?;
            }
            writeln!(f, "   💬 Messages: {}", file.line_count)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
