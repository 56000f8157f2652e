use thiserror::Error;

/// Configuration errors raised while parsing the field selector and filter.
///
/// These are fatal: they are reported before any file is opened. Per-file
/// problems (bad glob, unreadable file, malformed JSON) are logged instead
/// and never surface as a `HistogramError`.
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Invalid field path '{0}': path must not be empty")]
    InvalidFieldPath(String),

    #[error("Filter predicate '{0}' does not contain '='")]
    MissingEquals(String),

    #[error("Filter predicate '{0}' has an empty field path")]
    EmptyFilterPath(String),

    #[error("Invalid value '{value}' in filter predicate '{predicate}': {source}")]
    InvalidFilterValue {
        predicate: String,
        value: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistogramError>;
