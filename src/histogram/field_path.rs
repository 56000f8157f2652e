//! Dotted field paths
//!
//! Resolves paths like `request.headers.host` against a JSON document by
//! walking nested objects. Arrays are never indexed into.

use crate::error::{HistogramError, Result};
use serde_json::Value;
use std::fmt;

/// Parsed dotted path into a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// Original expression
    expression: String,
    /// Path segments, never empty
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path expression
    pub fn parse(expr: &str) -> Result<Self> {
        if expr.is_empty() {
            return Err(HistogramError::InvalidFieldPath(expr.to_string()));
        }

        Ok(Self {
            expression: expr.to_string(),
            segments: expr.split('.').map(str::to_string).collect(),
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Look the path up in `document`.
    ///
    /// Returns `None` if any key is missing or an intermediate value is not
    /// an object. A JSON `null` stored under the final key is returned as
    /// found.
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        let (last, parents) = self.segments.split_last()?;
        let mut current = document;

        for segment in parents {
            current = current.as_object()?.get(segment)?;
        }

        current.as_object()?.get(last)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_splits_on_dots() {
        let path = FieldPath::parse("a.b.c").unwrap();
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.expression(), "a.b.c");
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = FieldPath::parse("").unwrap_err();
        assert!(matches!(err, HistogramError::InvalidFieldPath(_)));
    }

    #[test]
    fn test_resolve_top_level_field() {
        let path = FieldPath::parse("k").unwrap();
        assert_eq!(path.resolve(&json!({"k": "x"})), Some(&json!("x")));
    }

    #[test]
    fn test_resolve_nested_field() {
        let path = FieldPath::parse("a.b").unwrap();
        assert_eq!(path.resolve(&json!({"a": {"b": 1}})), Some(&json!(1)));
    }

    #[test]
    fn test_resolve_null_counts_as_found() {
        let path = FieldPath::parse("a.b").unwrap();
        assert_eq!(path.resolve(&json!({"a": {"b": null}})), Some(&Value::Null));
    }

    #[test]
    fn test_resolve_through_non_object_fails() {
        // b is a number, so c cannot be looked up in it
        let path = FieldPath::parse("a.b.c").unwrap();
        assert_eq!(path.resolve(&json!({"a": {"b": 5}})), None);

        let path = FieldPath::parse("a.b").unwrap();
        assert_eq!(path.resolve(&json!({"a": null})), None);
        assert_eq!(path.resolve(&json!({"a": [{"b": 1}]})), None);
    }

    #[test]
    fn test_resolve_missing_key() {
        let path = FieldPath::parse("a.x").unwrap();
        assert_eq!(path.resolve(&json!({"a": {"b": 1}})), None);
        assert_eq!(path.resolve(&json!({"b": {"x": 1}})), None);
    }

    #[test]
    fn test_resolve_against_non_object_document() {
        let path = FieldPath::parse("a").unwrap();
        assert_eq!(path.resolve(&json!(42)), None);
        assert_eq!(path.resolve(&json!([{"a": 1}])), None);
        assert_eq!(path.resolve(&Value::Null), None);
    }

    #[test]
    fn test_resolve_returns_whole_subtree() {
        let path = FieldPath::parse("a").unwrap();
        assert_eq!(
            path.resolve(&json!({"a": {"b": [1, 2]}})),
            Some(&json!({"b": [1, 2]}))
        );
    }
}
