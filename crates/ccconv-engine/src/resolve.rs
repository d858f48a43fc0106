use ccconv_types::{FieldPath, Segment};
use serde_json::Value;

/// Follow `path` from `root`.
///
/// Returns `None` when any step is missing, which is distinct from
/// `Some(&Value::Null)` for a field that is present and null. A wildcard
/// segment yields the whole field so that the projector can expand it.
pub fn resolve<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| step(current, segment))
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match segment {
        Segment::Field(name) | Segment::Wildcard(name) => field(current, name),
        Segment::Index(name, index) => field(current, name)?.as_array()?.get(*index),
    }
}

fn field<'a>(current: &'a Value, name: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(name),
        // `content.0.text` addresses array elements by position
        Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
