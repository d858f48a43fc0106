use super::HandlerContext;
use crate::presentation::views::{TodayFile, TodayView};
use anyhow::Result;
use ccconv_providers::claude::io::modified_at;

/// Log files whose modification date is today (UTC)
pub fn handle(ctx: &HandlerContext) -> Result<()> {
    if !ctx.store.exists() {
        ctx.print_missing_root();
        return Ok(());
    }

    let today = ctx.today();
    let mut files = Vec::new();

    for project in ctx.store.discover(None) {
        for path in &project.log_files {
            let modified = match modified_at(path) {
                Ok(modified) => modified,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot stat log file");
                    continue;
                }
            };
            if modified.date_naive() != today {
                continue;
            }
            if let Some(file) = ctx.store.load_file(&project, path) {
                files.push(TodayFile::new(&project.name, &file));
            }
        }
    }

    print!("{}", TodayView::new(today, files));
    Ok(())
}
