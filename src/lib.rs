//! # json-histogram
//!
//! Counts the most frequent values of one field across files of
//! concatenated JSON documents.
//!
//! ## Usage
//!
//! ```bash
//! json-histogram --field request.path [--filter 'status=200'] logs/*.json
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, logging setup and fatal error reporting
//! - `cli` - Command-line argument definitions
//! - `error` - Configuration error types
//! - `histogram` - Field paths, filters, document source, counting and ranking
pub mod app;
pub mod cli;
pub mod error;
pub mod histogram;
