use crate::projector::extract_array_values;
use crate::resolve::resolve;
use ccconv_types::{Column, ColumnKind};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Ordered column → value mapping for one record.
///
/// `None` marks a column that did not resolve; such columns are left out
/// when the projection is serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    entries: Vec<(String, Option<Value>)>,
}

impl Projection {
    /// Insert or overwrite in place, keeping the first position of a key
    pub fn insert(&mut self, key: impl Into<String>, value: Option<Value>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// `None` if the key is unknown, `Some(None)` if it was absent in the record
    pub fn get(&self, key: &str) -> Option<Option<&Value>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Entries that resolved to a value
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Projection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.present() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Evaluate every column against `record`, in column order.
pub fn project(record: &Value, columns: &[Column]) -> Projection {
    let mut projection = Projection::default();

    for column in columns {
        let value = match column.kind() {
            ColumnKind::Path(path) => resolve(record, path).cloned(),
            ColumnKind::Expand { array, each } => {
                extract_array_values(resolve(record, array), each).map(Value::Array)
            }
        };
        projection.insert(column.expr(), value);
    }

    projection
}
