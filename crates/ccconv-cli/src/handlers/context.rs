use ccconv_core::Config;
use ccconv_providers::ClaudeLogStore;
use ccconv_types::Since;
use chrono::{DateTime, NaiveDate, Utc};
use is_terminal::IsTerminal;
use std::fmt::Display;

/// Everything a handler needs: where the logs are, settings, and "now"
pub struct HandlerContext {
    pub store: ClaudeLogStore,
    pub config: Config,
    pub now: DateTime<Utc>,
    pub enable_color: bool,
}

impl HandlerContext {
    pub fn new(store: ClaudeLogStore, config: Config) -> Self {
        Self {
            store,
            config,
            now: Utc::now(),
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    /// Current UTC calendar day
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Parse `--since`; an unusable value is reported and yields `None`
    pub fn since(&self, raw: Option<&str>) -> Option<Since> {
        match Since::parse(raw, self.today()) {
            Ok(since) => Some(since),
            Err(err) => {
                warn_user(err);
                None
            }
        }
    }

    pub fn print_missing_root(&self) {
        println!(
            "Projects directory not found: {}",
            self.store.log_root().display()
        );
    }
}

/// User-facing warning on stderr; the command still exits successfully
pub fn warn_user(message: impl Display) {
    eprintln!("Warning: {}", message);
}
