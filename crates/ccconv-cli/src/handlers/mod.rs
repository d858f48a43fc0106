mod context;

pub mod projects;
pub mod raws;
pub mod today;
pub mod tokens;

pub use context::{HandlerContext, warn_user};
