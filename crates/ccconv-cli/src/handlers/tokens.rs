use super::HandlerContext;
use crate::args::TokensArgs;
use crate::presentation::views::TokenUsageView;
use anyhow::Result;
use ccconv_engine::TokenTally;
use chrono::Duration;

pub fn handle(ctx: &HandlerContext, args: &TokensArgs) -> Result<()> {
    let hours = args
        .hours
        .unwrap_or_else(|| ctx.config.token_window_hours());
    let cutoff = ctx.now - Duration::hours(i64::from(hours));

    let records = ctx.store.load_records(args.project.as_deref());
    let tally = TokenTally::since(&records, cutoff);

    print!("{}", TokenUsageView::new(hours, tally));
    Ok(())
}
