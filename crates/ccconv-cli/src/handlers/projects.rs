use super::HandlerContext;
use crate::args::ProjectsArgs;
use crate::presentation::print_json;
use crate::presentation::views::{OneLineView, ProjectListView};
use anyhow::Result;
use ccconv_engine::summarize_projects;
use ccconv_types::SortKey;

pub fn handle(ctx: &HandlerContext, args: &ProjectsArgs) -> Result<()> {
    let Some(since) = ctx.since(args.since.as_deref()) else {
        return Ok(());
    };

    if !ctx.store.exists() && !args.json {
        ctx.print_missing_root();
        return Ok(());
    }

    let projects = ctx
        .store
        .load_projects_modified(args.project.as_deref(), |modified| {
            since.includes_date(modified.date_naive())
        });
    let summaries = summarize_projects(&projects, &since, SortKey::parse(args.sort.as_deref()));
    tracing::debug!(
        scanned = projects.len(),
        listed = summaries.len(),
        "projects summarized"
    );

    if args.json {
        print_json(&summaries)?;
    } else if args.one_line {
        print!("{}", OneLineView::new(&summaries));
    } else {
        print!("{}", ProjectListView::new(&summaries));
    }

    Ok(())
}
