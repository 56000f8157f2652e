//! Histogram accumulation
//!
//! Counts occurrences of a field's values across the documents that pass a
//! filter. Entries keep first-seen order so ties in the report are stable.

use super::field_path::FieldPath;
use super::filter::Filter;
use super::key::HistogramKey;
use indexmap::IndexMap;
use serde_json::Value;

/// Mapping from distinct field values to occurrence counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: IndexMap<HistogramKey, u64>,
    documents_seen: u64,
    documents_matched: u64,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram of `field` over every document that passes `filter`
    pub fn accumulate<I>(documents: I, field: &FieldPath, filter: &Filter) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut histogram = Self::new();
        for document in documents {
            histogram.record(&document, field, filter);
        }
        histogram
    }

    /// Count one document. Returns true if it contributed to the histogram.
    pub fn record(&mut self, document: &Value, field: &FieldPath, filter: &Filter) -> bool {
        self.documents_seen += 1;

        if !filter.matches(document) {
            return false;
        }
        self.documents_matched += 1;

        match field.resolve(document) {
            Some(value) => {
                self.increment(value);
                true
            }
            None => false,
        }
    }

    /// Increment the count for `value`, starting at 1 on first occurrence
    pub fn increment(&mut self, value: &Value) {
        *self.counts.entry(HistogramKey::from(value)).or_insert(0) += 1;
    }

    /// Count recorded for `value`, 0 if never seen
    pub fn count(&self, value: &Value) -> u64 {
        self.counts
            .get(&HistogramKey::from(value))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&HistogramKey, u64)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn documents_seen(&self) -> u64 {
        self.documents_seen
    }

    pub fn documents_matched(&self) -> u64 {
        self.documents_matched
    }
}
