//! Document source over files and glob patterns
//!
//! Expands each pattern in order, opens every matching file in turn and
//! decodes it as a stream of concatenated JSON values. Errors never abort the
//! run: a bad pattern, an unreadable file or a malformed record is logged and
//! processing moves on to the next unit.

use glob::{glob, Paths};
use serde_json::de::IoRead;
use serde_json::{Deserializer, StreamDeserializer, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Counters collected while reading documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub patterns: usize,
    pub invalid_patterns: usize,
    pub files_opened: usize,
    pub files_skipped: usize,
    pub documents: u64,
    pub decode_errors: usize,
}

/// Lazy sequence of JSON values decoded from one reader.
///
/// Values may be separated by whitespace or simply follow each other
/// (`{"a":1}{"a":2}`). The first decode error is yielded once and ends the
/// stream, since the decoder cannot reliably resynchronise after it.
pub struct JsonStream<R: Read> {
    inner: StreamDeserializer<'static, IoRead<R>, Value>,
    failed: bool,
}

impl<R: Read> JsonStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: Deserializer::from_reader(reader).into_iter::<Value>(),
            failed: false,
        }
    }
}

impl<R: Read> Iterator for JsonStream<R> {
    type Item = Result<Value, serde_json::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.inner.next() {
            Some(Err(e)) => {
                self.failed = true;
                Some(Err(e))
            }
            other => other,
        }
    }
}

/// Ordered list of file paths or glob patterns to read documents from
#[derive(Debug, Clone, Default)]
pub struct DocumentSource {
    patterns: Vec<String>,
    stats: SourceStats,
}

impl DocumentSource {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            stats: SourceStats::default(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn stats(&self) -> &SourceStats {
        &self.stats
    }

    /// Iterate over every document in every matching file.
    ///
    /// Files are opened one at a time and closed before the next is opened.
    pub fn documents(&mut self) -> Documents<'_> {
        Documents {
            patterns: self.patterns.iter(),
            expansion: None,
            current: None,
            stats: &mut self.stats,
        }
    }
}

/// Glob expansion in progress for one pattern
struct Expansion<'a> {
    pattern: &'a str,
    paths: Paths,
    matched: usize,
}

/// Decoder for the file currently being drained
struct OpenFile {
    path: PathBuf,
    stream: JsonStream<BufReader<File>>,
}

/// Iterator returned by [`DocumentSource::documents`]
pub struct Documents<'a> {
    patterns: std::slice::Iter<'a, String>,
    expansion: Option<Expansion<'a>>,
    current: Option<OpenFile>,
    stats: &'a mut SourceStats,
}

impl Documents<'_> {
    /// Next regular file from the pattern list, expanding patterns lazily
    fn next_path(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(expansion) = self.expansion.as_mut() {
                match expansion.paths.next() {
                    Some(Ok(path)) => {
                        if path.is_dir() {
                            debug!("Skipping directory {}", path.display());
                            continue;
                        }
                        expansion.matched += 1;
                        return Some(path);
                    }
                    Some(Err(e)) => {
                        warn!("Error reading {}: {}", e.path().display(), e.error());
                        continue;
                    }
                    None => {
                        if expansion.matched == 0 {
                            warn!("No files match '{}'", expansion.pattern);
                        }
                        self.expansion = None;
                    }
                }
            }

            let pattern = self.patterns.next()?;
            self.stats.patterns += 1;

            match glob(pattern) {
                Ok(paths) => {
                    debug!("Expanding pattern '{}'", pattern);
                    self.expansion = Some(Expansion {
                        pattern,
                        paths,
                        matched: 0,
                    });
                }
                Err(e) => {
                    warn!("Error in name or pattern '{}': {}", pattern, e);
                    self.stats.invalid_patterns += 1;
                }
            }
        }
    }

    fn open(&mut self, path: PathBuf) -> Option<OpenFile> {
        match File::open(&path) {
            Ok(file) => {
                debug!("Reading {}", path.display());
                self.stats.files_opened += 1;
                Some(OpenFile {
                    stream: JsonStream::new(BufReader::new(file)),
                    path,
                })
            }
            Err(e) => {
                warn!("Cannot open file {}: {}", path.display(), e);
                self.stats.files_skipped += 1;
                None
            }
        }
    }
}

impl Iterator for Documents<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        loop {
            if let Some(file) = self.current.as_mut() {
                match file.stream.next() {
                    Some(Ok(document)) => {
                        self.stats.documents += 1;
                        return Some(document);
                    }
                    Some(Err(e)) => {
                        warn!(
                            "Error parsing file {} at line {} column {}: {}",
                            file.path.display(),
                            e.line(),
                            e.column(),
                            e
                        );
                        self.stats.decode_errors += 1;
                        self.current = None;
                    }
                    None => {
                        debug!("Finished {}", file.path.display());
                        self.current = None;
                    }
                }
                continue;
            }

            let path = self.next_path()?;
            self.current = self.open(path);
        }
    }
}
