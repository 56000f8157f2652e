//! Field value histograms over JSON documents
//!
//! Reads concatenated JSON documents from files, keeps those matching an
//! equality filter, counts the values of one dotted field and reports the
//! most frequent ones.

mod counter;
mod field_path;
mod filter;
mod key;
mod report;
mod source;

pub use counter::Histogram;
pub use field_path::FieldPath;
pub use filter::{Filter, Predicate};
pub use key::{json_eq, HistogramKey};
pub use report::{ReportEntry, TopN, REPORT_LIMIT};
pub use source::{DocumentSource, Documents, JsonStream, SourceStats};

use crate::error::Result;
use anyhow::Context;
use std::io::Write;
use tracing::debug;

/// Validated run configuration, immutable once built
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    /// Field whose values are counted
    pub field: FieldPath,
    /// Documents must match this filter to be counted
    pub filter: Filter,
    /// Files or glob patterns, read in order
    pub patterns: Vec<String>,
    /// Maximum number of report lines
    pub limit: usize,
}

impl HistogramConfig {
    /// Parse the field selector and filter expression.
    ///
    /// Fails on an empty field path or a malformed filter; no file is
    /// touched.
    pub fn from_config(field: &str, filter: Option<&str>, patterns: Vec<String>) -> Result<Self> {
        let field = FieldPath::parse(field)?;
        let filter = match filter {
            Some(expr) => Filter::parse(expr)?,
            None => Filter::default(),
        };

        Ok(Self {
            field,
            filter,
            patterns,
            limit: REPORT_LIMIT,
        })
    }
}

/// Counters describing a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub source: SourceStats,
    pub documents_matched: u64,
    pub distinct_values: usize,
    pub reported: usize,
}

/// Read every document, build the histogram and write the report to `out`
pub fn run<W: Write>(config: &HistogramConfig, out: &mut W) -> anyhow::Result<RunSummary> {
    debug!(
        "Counting field '{}' across {} pattern(s), {} filter predicate(s)",
        config.field,
        config.patterns.len(),
        config.filter.predicates().len()
    );

    let mut source = DocumentSource::new(config.patterns.clone());
    let histogram = Histogram::accumulate(source.documents(), &config.field, &config.filter);

    let top = TopN::from_histogram(&histogram, config.limit);
    top.write_to(out).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    let summary = RunSummary {
        source: source.stats().clone(),
        documents_matched: histogram.documents_matched(),
        distinct_values: histogram.len(),
        reported: top.len(),
    };

    debug!(
        "Read {} document(s) from {} file(s) ({} skipped, {} decode error(s)); {} matched, {} distinct value(s)",
        summary.source.documents,
        summary.source.files_opened,
        summary.source.files_skipped,
        summary.source.decode_errors,
        summary.documents_matched,
        summary.distinct_values
    );

    Ok(summary)
}
