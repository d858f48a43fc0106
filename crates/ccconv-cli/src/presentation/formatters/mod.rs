pub mod json;
pub mod number;
pub mod text;
pub mod time;

pub use json::{format_compact, format_scalar};
pub use number::{format_kib, format_thousands};
pub use text::{first_line, truncate};
