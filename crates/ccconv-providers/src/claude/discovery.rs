use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub(crate) const LOG_EXTENSION: &str = "jsonl";

/// Direct subdirectories of the log root, in name order.
///
/// A missing log root simply has no projects.
pub fn list_project_dirs(log_root: &Path) -> Result<Vec<PathBuf>> {
    if !log_root.is_dir() {
        return Ok(Vec::new());
    }

    children(log_root, |path| path.is_dir())
}

/// `.jsonl` files directly inside a project directory, in name order
pub fn list_log_files(project_dir: &Path) -> Result<Vec<PathBuf>> {
    children(project_dir, is_log_file)
}

pub fn is_log_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == LOG_EXTENSION)
}

fn children(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    // Opening the directory itself must succeed; unreadable children are skipped
    std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if keep(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}
