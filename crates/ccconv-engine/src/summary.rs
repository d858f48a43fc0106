use ccconv_types::{LogFile, ProjectLog, Record, Since, SortKey, UsageStats};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-project totals for the `projects` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub file_count: usize,
    pub last_update: DateTime<Utc>,
    pub total_messages: usize,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    pub session_start: DateTime<Utc>,
    pub session_end: DateTime<Utc>,
}

impl ProjectSummary {
    /// Last `-`-separated part of the directory name, or the whole name when that part is empty
    pub fn short_name(&self) -> &str {
        match self.name.rsplit('-').next() {
            Some(last) if !last.is_empty() => last,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    file_count: usize,
    total_messages: usize,
    usage: UsageStats,
    last_update: Option<DateTime<Utc>>,
    earliest: Option<DateTime<Utc>>,
    cwd: Option<String>,
    git_branch: Option<String>,
}

impl Accumulator {
    fn absorb_file(self, file: &LogFile) -> Self {
        let seeded = Self {
            file_count: self.file_count + 1,
            total_messages: self.total_messages + file.line_count,
            last_update: self.last_update.max(Some(file.modified)),
            ..self
        };
        file.records.iter().fold(seeded, Self::absorb_record)
    }

    fn absorb_record(self, record: &Record) -> Self {
        let earliest = match (self.earliest, record.timestamp()) {
            (Some(current), Some(at)) => Some(current.min(at)),
            (current, at) => current.or(at),
        };

        Self {
            usage: self.usage + record.usage().unwrap_or_default(),
            earliest,
            cwd: non_empty(record.cwd()).or(self.cwd),
            git_branch: non_empty(record.git_branch()).or(self.git_branch),
            ..self
        }
    }

    fn finish(self, name: &str) -> Option<ProjectSummary> {
        if self.total_messages == 0 {
            return None;
        }
        let last_update = self.last_update?;

        Some(ProjectSummary {
            name: name.to_string(),
            file_count: self.file_count,
            last_update,
            total_messages: self.total_messages,
            input_tokens: self.usage.input_tokens,
            output_tokens: self.usage.output_tokens,
            total_tokens: self.usage.total(),
            cwd: self.cwd,
            git_branch: self.git_branch,
            session_start: self.earliest.unwrap_or(last_update),
            session_end: last_update,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Fold the files of one project modified on or after `since`.
///
/// Returns `None` when no included file has any line.
pub fn summarize_project(project: &ProjectLog, since: &Since) -> Option<ProjectSummary> {
    project
        .files
        .iter()
        .filter(|file| since.includes_date(file.modified.date_naive()))
        .fold(Accumulator::default(), Accumulator::absorb_file)
        .finish(&project.name)
}

pub fn summarize_projects(
    projects: &[ProjectLog],
    since: &Since,
    sort: SortKey,
) -> Vec<ProjectSummary> {
    let mut summaries: Vec<_> = projects
        .iter()
        .filter_map(|project| summarize_project(project, since))
        .collect();
    sort_summaries(&mut summaries, sort);
    summaries
}

/// Sort by `key`; ties keep name order
pub fn sort_summaries(summaries: &mut [ProjectSummary], key: SortKey) {
    summaries.sort_by(|a, b| a.name.cmp(&b.name));

    match key {
        SortKey::Tokens => summaries.sort_by(|a, b| b.total_tokens.cmp(&a.total_tokens)),
        SortKey::Messages => summaries.sort_by(|a, b| b.total_messages.cmp(&a.total_messages)),
        SortKey::Update => summaries.sort_by(|a, b| b.last_update.cmp(&a.last_update)),
        SortKey::Name => {}
    }
}
