mod plain;
mod projects;
mod talk;
mod today;
mod tokens;

pub use plain::PlainView;
pub use projects::{OneLineView, ProjectListView};
pub use talk::TalkView;
pub use today::{TodayFile, TodayView};
pub use tokens::TokenUsageView;
