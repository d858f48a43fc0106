mod project;
mod record;
mod usage;

pub use project::{LogFile, ProjectLog};
pub use record::{Provenance, Record};
pub use usage::UsageStats;
