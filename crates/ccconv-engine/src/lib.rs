// Engine module - field projection, classification and summaries
// This layer sits between loaded records (types) and CLI presentation

pub mod classify;
pub mod filter;
pub mod projection;
pub mod projector;
pub mod resolve;
pub mod summary;
pub mod tokens;

pub use classify::{RecordKind, is_tool_result};
pub use filter::{filter_by_since, filter_by_type, matches_type};
pub use projection::{Projection, project};
pub use projector::extract_array_values;
pub use resolve::resolve;
pub use summary::{ProjectSummary, sort_summaries, summarize_project, summarize_projects};
pub use tokens::TokenTally;

use ccconv_types::{Column, Record};

// Façade API - stable entry points for the CLI layer

/// Project every record onto the requested columns
pub fn project_records(records: &[Record], columns: &[Column]) -> Vec<Projection> {
    records
        .iter()
        .map(|record| project(record.value(), columns))
        .collect()
}
