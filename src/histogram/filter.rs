//! Equality filters over JSON documents
//!
//! A filter is written as comma-separated `path=json-literal` predicates,
//! e.g. `status=200,request.method="GET"`. A document passes when every
//! predicate's path resolves to a value structurally equal to its literal.

use super::field_path::FieldPath;
use super::key::json_eq;
use crate::error::{HistogramError, Result};
use serde_json::Value;
use tracing::trace;

/// One `path=value` equality predicate
#[derive(Debug, Clone)]
pub struct Predicate {
    pub path: FieldPath,
    pub expected: Value,
}

impl Predicate {
    /// Parse a single `path=json-literal` predicate, splitting at the first `=`
    pub fn parse(text: &str) -> Result<Self> {
        let (path, literal) = text
            .split_once('=')
            .ok_or_else(|| HistogramError::MissingEquals(text.to_string()))?;

        let path = path.trim();
        if path.is_empty() {
            return Err(HistogramError::EmptyFilterPath(text.to_string()));
        }

        let expected = serde_json::from_str::<Value>(literal).map_err(|source| {
            HistogramError::InvalidFilterValue {
                predicate: text.to_string(),
                value: literal.to_string(),
                source,
            }
        })?;

        Ok(Self {
            path: FieldPath::parse(path)?,
            expected,
        })
    }

    pub fn matches(&self, document: &Value) -> bool {
        self.path
            .resolve(document)
            .is_some_and(|actual| json_eq(actual, &self.expected))
    }
}

/// Conjunction of equality predicates. The default filter is empty and
/// matches every document.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Parse a filter expression string
    pub fn parse(expr: &str) -> Result<Self> {
        if expr.trim().is_empty() {
            return Ok(Self::default());
        }

        let predicates = expr
            .split(',')
            .map(Predicate::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { predicates })
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, document: &Value) -> bool {
        let matched = self.predicates.iter().all(|p| p.matches(document));
        trace!("Filter evaluated to {}", matched);
        matched
    }
}
