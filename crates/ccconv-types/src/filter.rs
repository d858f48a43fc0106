use std::fmt;

/// Record category requested with `--type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    /// `user` records that are not tool results
    User,
    /// every `user` record, tool results included
    UserAndTools,
    /// `assistant` records plus `user` records carrying tool results
    Assistant,
    /// exact match on the record's `type` field
    Exact(String),
}

impl TypeFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "user" => TypeFilter::User,
            "userandtools" => TypeFilter::UserAndTools,
            "assistant" => TypeFilter::Assistant,
            other => TypeFilter::Exact(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeFilter::User => "user",
            TypeFilter::UserAndTools => "userandtools",
            TypeFilter::Assistant => "assistant",
            TypeFilter::Exact(raw) => raw,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering for `projects --sort`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// total tokens, largest first
    Tokens,
    /// message count, largest first
    Messages,
    /// last update, newest first
    Update,
    /// project name, ascending
    #[default]
    Name,
}

impl SortKey {
    /// Unknown keys fall back to name order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("tokens") => SortKey::Tokens,
            Some("messages") => SortKey::Messages,
            Some("update") => SortKey::Update,
            _ => SortKey::Name,
        }
    }
}
