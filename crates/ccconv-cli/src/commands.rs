use crate::args::{Cli, Commands};
use crate::handlers::{self, HandlerContext};
use anyhow::Result;
use ccconv_core::{Config, resolve_data_dir, resolve_log_root};
use ccconv_providers::ClaudeLogStore;

const CONFIG_FILE: &str = "config.toml";

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
    let log_root = resolve_log_root(cli.log_root.as_deref(), &config)?;
    tracing::debug!(
        data_dir = %data_dir.display(),
        log_root = %log_root.display(),
        "paths resolved"
    );

    let ctx = HandlerContext::new(ClaudeLogStore::new(log_root), config);

    let Some(command) = cli.command else {
        return handlers::today::handle(&ctx);
    };

    match command {
        Commands::Raws(args) => handlers::raws::handle(&ctx, &args),
        Commands::Projects(args) => handlers::projects::handle(&ctx, &args),
        Commands::Tokens(args) => handlers::tokens::handle(&ctx, &args),
    }
}
