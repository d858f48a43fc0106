use crate::resolve::resolve;
use ccconv_types::FieldPath;
use serde_json::Value;

/// Apply `each` to every element of `array`, keeping the elements where it resolves.
///
/// An empty `each` returns the elements unchanged. Anything that is not an
/// array (including an absent value) yields `None`.
pub fn extract_array_values(array: Option<&Value>, each: &FieldPath) -> Option<Vec<Value>> {
    let items = array?.as_array()?;

    if each.is_empty() {
        return Some(items.clone());
    }

    Some(
        items
            .iter()
            .filter_map(|item| resolve(item, each))
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(expr: &str) -> FieldPath {
        FieldPath::parse(expr).unwrap()
    }

    #[test]
    fn test_extracts_subfield() {
        let content = json!([
            {"type": "text", "text": "a"},
            {"type": "text", "text": "b"}
        ]);
        assert_eq!(
            extract_array_values(Some(&content), &path("text")),
            Some(vec![json!("a"), json!("b")])
        );
    }

    #[test]
    fn test_skips_elements_without_subfield() {
        let content = json!([
            {"type": "text", "text": "a"},
            {"type": "tool_use", "name": "Bash", "input": {"command": "ls"}},
            {"type": "text", "text": null}
        ]);
        assert_eq!(
            extract_array_values(Some(&content), &path("text")),
            Some(vec![json!("a"), Value::Null])
        );
        assert_eq!(
            extract_array_values(Some(&content), &path("input.command")),
            Some(vec![json!("ls")])
        );
    }

    #[test]
    fn test_empty_subpath_returns_elements() {
        let content = json!([1, "two", {"three": 3}]);
        assert_eq!(
            extract_array_values(Some(&content), &FieldPath::default()),
            Some(vec![json!(1), json!("two"), json!({"three": 3})])
        );
    }

    #[test]
    fn test_non_array_is_absent() {
        assert_eq!(extract_array_values(Some(&json!("hello")), &path("text")), None);
        assert_eq!(extract_array_values(Some(&json!({"text": "x"})), &path("text")), None);
        assert_eq!(extract_array_values(None, &path("text")), None);
    }

    #[test]
    fn test_empty_array_stays_empty() {
        assert_eq!(
            extract_array_values(Some(&json!([])), &path("text")),
            Some(Vec::new())
        );
    }
}
