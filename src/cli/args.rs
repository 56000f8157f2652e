//! CLI argument structures
//!
//! Defines the command-line interface of `json-histogram`.

use clap::Parser;

/// Count the most frequent values of a JSON field across files
#[derive(Parser, Debug)]
#[command(name = "json-histogram")]
#[command(
    about = "json-histogram - Count the most frequent values of a JSON field across files",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv adds line numbers)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Dotted path of the field to count (e.g. "request.status")
    #[arg(short = 'f', long, value_name = "PATH")]
    pub field: String,

    /// Only count documents matching all of these comma-separated
    /// `path=json-literal` predicates (e.g. 'status=200,method="GET"')
    #[arg(long, value_name = "PAIRS")]
    pub filter: Option<String>,

    /// Files or glob patterns containing concatenated JSON documents
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_field_is_required() {
        let err = Cli::try_parse_from(["json-histogram", "a.json"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_parse_all_arguments() {
        let cli = Cli::try_parse_from([
            "json-histogram",
            "-vv",
            "-f",
            "path",
            "--filter",
            "status=200",
            "a.json",
            "logs/*.json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.field, "path");
        assert_eq!(cli.filter.as_deref(), Some("status=200"));
        assert_eq!(cli.files, vec!["a.json", "logs/*.json"]);
    }
}
