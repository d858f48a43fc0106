mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ProjectsArgs, RawsArgs, TokensArgs, normalize_args};
pub use commands::run;
