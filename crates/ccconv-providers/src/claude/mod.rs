pub mod discovery;
pub mod io;

use ccconv_types::{LogFile, ProjectLog, Record};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// A project directory found under the log root, not yet read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    pub name: String,
    pub path: PathBuf,
    pub log_files: Vec<PathBuf>,
}

/// Read access to `~/.claude/projects`-style log trees.
///
/// Failures are absorbed here: unreadable directories and files are logged
/// as warnings and left out, malformed lines are dropped by the parser.
#[derive(Debug, Clone)]
pub struct ClaudeLogStore {
    log_root: PathBuf,
}

impl ClaudeLogStore {
    pub fn new(log_root: impl Into<PathBuf>) -> Self {
        Self {
            log_root: log_root.into(),
        }
    }

    pub fn log_root(&self) -> &Path {
        &self.log_root
    }

    pub fn exists(&self) -> bool {
        self.log_root.is_dir()
    }

    /// Project directories whose name contains `project` (all when `None`)
    pub fn discover(&self, project: Option<&str>) -> Vec<ProjectDir> {
        let dirs = match discovery::list_project_dirs(&self.log_root) {
            Ok(dirs) => dirs,
            Err(err) => {
                tracing::warn!(root = %self.log_root.display(), error = %err, "cannot read log root");
                return Vec::new();
            }
        };

        dirs.into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                if !matches_project(&name, project) {
                    return None;
                }

                match discovery::list_log_files(&path) {
                    Ok(log_files) => Some(ProjectDir {
                        name,
                        path,
                        log_files,
                    }),
                    Err(err) => {
                        tracing::warn!(project = %name, error = %err, "cannot read project directory");
                        None
                    }
                }
            })
            .collect()
    }

    /// Read one file of a discovered project; `None` (with a warning) when unreadable
    pub fn load_file(&self, project: &ProjectDir, path: &Path) -> Option<LogFile> {
        match io::read_log_file(path, &project.name) {
            Ok(file) => Some(file),
            Err(err) => {
                tracing::warn!(project = %project.name, error = %err, "cannot read log file");
                None
            }
        }
    }

    pub fn load_projects(&self, project: Option<&str>) -> Vec<ProjectLog> {
        self.collect_projects(project, |_, _| true)
    }

    /// Like `load_projects`, but only reads files whose modification time passes `keep`
    pub fn load_projects_modified(
        &self,
        project: Option<&str>,
        keep: impl Fn(DateTime<Utc>) -> bool,
    ) -> Vec<ProjectLog> {
        self.collect_projects(project, |dir, path| match io::modified_at(path) {
            Ok(modified) => keep(modified),
            Err(err) => {
                tracing::warn!(project = %dir.name, path = %path.display(), error = %err, "cannot stat log file");
                false
            }
        })
    }

    fn collect_projects(
        &self,
        project: Option<&str>,
        wanted: impl Fn(&ProjectDir, &Path) -> bool,
    ) -> Vec<ProjectLog> {
        self.discover(project)
            .into_iter()
            .map(|dir| {
                let files = dir
                    .log_files
                    .iter()
                    .filter(|path| wanted(&dir, path))
                    .filter_map(|path| self.load_file(&dir, path))
                    .collect();

                ProjectLog {
                    name: dir.name,
                    path: dir.path,
                    files,
                }
            })
            .collect()
    }

    /// Every record of every matching project, in project/file/line order
    pub fn load_records(&self, project: Option<&str>) -> Vec<Record> {
        self.load_projects(project)
            .into_iter()
            .flat_map(|project| project.files)
            .flat_map(|file| file.records)
            .collect()
    }
}

fn matches_project(name: &str, filter: Option<&str>) -> bool {
    filter.is_none_or(|needle| name.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::TimeZone;
    use filetime::FileTime;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, project: &str, file: &str, body: &str) -> Result<()> {
        let dir = root.join(project);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(file), body)?;
        Ok(())
    }

    #[test]
    fn test_loads_well_formed_records_across_files() -> Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(
            root,
            "-home-me-alpha",
            "a.jsonl",
            "{\"type\":\"user\",\"uuid\":\"1\"}\n{\"type\":\"assistant\",\"uuid\":\"2\"}\n{oops\n",
        )?;
        write(
            root,
            "-home-me-beta",
            "b.jsonl",
            "{\"type\":\"assistant\",\"uuid\":\"3\"}\nnot json\n",
        )?;

        let store = ClaudeLogStore::new(root);
        let records = store.load_records(None);
        let uuids: Vec<_> = records
            .iter()
            .filter_map(|r| r.value()["uuid"].as_str())
            .collect();
        assert_eq!(uuids, vec!["1", "2", "3"]);

        let projects = store.load_projects(None);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].files[0].line_count, 3);
        assert_eq!(projects[1].records().count(), 1);
        Ok(())
    }

    #[test]
    fn test_project_filter_is_substring() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "-home-me-alpha", "a.jsonl", "{\"type\":\"user\"}\n")?;
        write(dir.path(), "-home-me-beta", "b.jsonl", "{\"type\":\"user\"}\n")?;

        let store = ClaudeLogStore::new(dir.path());
        let names: Vec<_> = store
            .discover(Some("alp"))
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["-home-me-alpha"]);
        assert_eq!(store.discover(Some("")).len(), 2);
        Ok(())
    }

    #[test]
    fn test_modified_filter_skips_files_before_reading() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "-home-me-alpha", "old.jsonl", "{\"type\":\"user\",\"uuid\":\"old\"}\n")?;
        write(dir.path(), "-home-me-alpha", "new.jsonl", "{\"type\":\"user\",\"uuid\":\"new\"}\n")?;

        let old = dir.path().join("-home-me-alpha").join("old.jsonl");
        filetime::set_file_mtime(&old, FileTime::from_unix_time(1_724_112_000, 0))?;
        let cutoff = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();

        let store = ClaudeLogStore::new(dir.path());
        let projects = store.load_projects_modified(None, |modified| modified >= cutoff);
        assert_eq!(projects.len(), 1);
        let names: Vec<_> = projects[0].files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["new.jsonl"]);

        let none = store.load_projects_modified(None, |_| false);
        assert!(none[0].files.is_empty());
        assert_eq!(store.load_projects(None)[0].files.len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_empty() {
        let store = ClaudeLogStore::new("/definitely/not/here/ccconv");
        assert!(!store.exists());
        assert!(store.load_records(None).is_empty());
    }
}
