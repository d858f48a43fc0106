use super::{HandlerContext, warn_user};
use crate::args::RawsArgs;
use crate::presentation::print_json;
use crate::presentation::views::{PlainView, TalkView};
use crate::types::RawFormat;
use anyhow::Result;
use ccconv_engine::{filter_by_since, filter_by_type, project_records};
use ccconv_types::{Column, TypeFilter};

pub fn handle(ctx: &HandlerContext, args: &RawsArgs) -> Result<()> {
    let Some(since) = ctx.since(args.since.as_deref()) else {
        return Ok(());
    };

    let columns = match args.column.as_deref().map(Column::parse_list).transpose() {
        Ok(columns) => columns.filter(|columns| !columns.is_empty()),
        Err(err) => {
            warn_user(format_args!("invalid column expression: {}", err));
            return Ok(());
        }
    };

    let type_filter = args
        .type_filter
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(TypeFilter::parse);

    let records = ctx.store.load_records(args.project.as_deref());
    let records = filter_by_since(records, &since);
    let records = filter_by_type(records, type_filter.as_ref());
    tracing::debug!(count = records.len(), format = %args.format, "records selected");

    match (args.format, columns) {
        (RawFormat::Talk, _) => print!("{}", TalkView::new(&records, ctx.enable_color)),
        (RawFormat::Plain, Some(columns)) => print!(
            "{}",
            PlainView::from_projections(&project_records(&records, &columns))
        ),
        (RawFormat::Plain, None) => print!("{}", PlainView::from_records(&records)),
        (RawFormat::Json, Some(columns)) => print_json(&project_records(&records, &columns))?,
        (RawFormat::Json, None) => print_json(&records)?,
    }

    Ok(())
}
