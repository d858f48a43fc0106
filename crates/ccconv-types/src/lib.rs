pub mod domain;
pub mod error;
pub mod filter;
pub mod path;
pub mod since;

pub use domain::*;
pub use error::{PathError, SinceError};
pub use filter::{SortKey, TypeFilter};
pub use path::{Column, ColumnKind, FieldPath, Segment};
pub use since::{Since, parse_timestamp, start_of_day};
