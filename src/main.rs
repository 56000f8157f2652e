use clap::Parser;
use json_histogram::app::{handle_fatal_error, init_logging, AppConfig};
use json_histogram::cli::Cli;
use json_histogram::histogram;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configuration errors are fatal before any file is read
    let config = AppConfig::from_cli(&cli).unwrap_or_else(|e| handle_fatal_error(e, cli.verbose));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = histogram::run(&config.histogram, &mut out) {
        handle_fatal_error(e, config.verbose);
    }
}
