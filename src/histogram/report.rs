//! Top-N ranking of histogram entries
//!
//! Entries are ordered by count, highest first. The sort is stable, so
//! values with equal counts appear in the order they were first seen.

use super::counter::Histogram;
use super::key::HistogramKey;
use std::fmt;
use std::io::{self, Write};

/// Maximum number of lines in a report
pub const REPORT_LIMIT: usize = 10;

/// One ranked `value count` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub value: HistogramKey,
    pub count: u64,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.count)
    }
}

/// The highest-count entries of a histogram, in descending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopN {
    entries: Vec<ReportEntry>,
}

impl TopN {
    /// Rank `histogram` and keep at most `limit` entries
    pub fn from_histogram(histogram: &Histogram, limit: usize) -> Self {
        let mut entries: Vec<ReportEntry> = histogram
            .iter()
            .map(|(value, count)| ReportEntry {
                value: value.clone(),
                count,
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);

        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write one `value count` line per entry
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }
}
