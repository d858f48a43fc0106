pub mod config;
pub mod error;
pub mod path;

pub use config::{Config, DEFAULT_TOKEN_WINDOW_HOURS};
pub use error::{Error, Result};
pub use path::{expand_tilde, resolve_data_dir, resolve_log_root};
