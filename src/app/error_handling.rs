//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Report a fatal error and exit with status 1
///
/// # Verbose Mode Behavior
/// - `verbose = 0`: the error and its causes on one line
/// - `verbose >= 1`: the full error chain, one cause per line
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    eprintln!("Error: {error:#}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(1)
}
