// Error types
pub mod error;

// Claude Code project logs
pub mod claude;

pub use claude::{ClaudeLogStore, ProjectDir};
pub use error::{Error, Result};
