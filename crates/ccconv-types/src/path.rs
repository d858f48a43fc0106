use crate::error::PathError;
use std::fmt;

/// One step of a field-path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `name`: descend into an object field (or a numeric array position)
    Field(String),
    /// `name[N]`: descend into `name`, then take element `N`
    Index(String, usize),
    /// `name[]`: descend into `name` and keep the whole array
    Wildcard(String),
}

impl Segment {
    fn parse(raw: &str, expr: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::EmptySegment(expr.to_string()));
        }

        let invalid = || PathError::InvalidSegment {
            expr: expr.to_string(),
            segment: raw.to_string(),
        };

        let Some(open) = raw.find('[') else {
            if raw.contains(']') {
                return Err(invalid());
            }
            return Ok(Segment::Field(raw.to_string()));
        };

        let name = &raw[..open];
        let inner = raw[open + 1..].strip_suffix(']').ok_or_else(invalid)?;
        if name.is_empty() || inner.contains(['[', ']']) {
            return Err(invalid());
        }

        if inner.is_empty() {
            return Ok(Segment::Wildcard(name.to_string()));
        }

        inner
            .parse::<usize>()
            .map(|index| Segment::Index(name.to_string(), index))
            .map_err(|_| invalid())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{}", name),
            Segment::Index(name, index) => write!(f, "{}[{}]", name, index),
            Segment::Wildcard(name) => write!(f, "{}[]", name),
        }
    }
}

/// A parsed dotted/bracketed field path such as `message.content[0].text`.
///
/// The empty path is valid and refers to the value it is resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parse an expression. At most one `[]` wildcard is accepted.
    pub fn parse(expr: &str) -> Result<Self, PathError> {
        if expr.is_empty() {
            return Ok(Self::default());
        }

        let mut segments = Vec::new();
        for raw in expr.split('.') {
            let segment = Segment::parse(raw, expr)?;
            let is_wildcard = matches!(segment, Segment::Wildcard(_));
            if is_wildcard && segments.iter().any(|s| matches!(s, Segment::Wildcard(_))) {
                return Err(PathError::NestedWildcard(expr.to_string()));
            }
            segments.push(segment);
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// How a column is evaluated against a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Resolve the path directly
    Path(FieldPath),
    /// `array[].each`: resolve `array`, then `each` against every element
    Expand { array: FieldPath, each: FieldPath },
}

/// One `--column` expression, keeping the original text as its output key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    expr: String,
    kind: ColumnKind,
}

impl Column {
    pub fn parse(expr: &str) -> Result<Self, PathError> {
        let expr = expr.trim();

        let kind = match expr.split_once("[].") {
            Some((array, each)) => {
                if each.contains("[]") || array.contains("[]") {
                    return Err(PathError::NestedWildcard(expr.to_string()));
                }
                ColumnKind::Expand {
                    array: FieldPath::parse(array)?,
                    each: FieldPath::parse(each)?,
                }
            }
            None => ColumnKind::Path(FieldPath::parse(expr)?),
        };

        Ok(Self {
            expr: expr.to_string(),
            kind,
        })
    }

    /// Parse a comma-separated list; blank entries are skipped.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, PathError> {
        list.split(',')
            .map(str::trim)
            .filter(|expr| !expr.is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }
}
