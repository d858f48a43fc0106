use thiserror::Error;

/// Errors raised while parsing a field-path or column expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty segment in '{0}'")]
    EmptySegment(String),

    #[error("invalid segment '{segment}' in '{expr}'")]
    InvalidSegment { expr: String, segment: String },

    #[error("nested wildcards are not supported in '{0}'")]
    NestedWildcard(String),
}

/// Errors raised while parsing a `--since` bound
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinceError {
    #[error("invalid date format: {0}")]
    InvalidDate(String),
}
