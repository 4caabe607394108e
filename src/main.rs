//! topwords - Word frequency tally for plain-text documents
//!
//! topwords provides:
//! - Whitespace tokenization with case folding and punctuation stripping
//! - Filtering against a user-supplied list of common words
//! - A ranked top-N listing (table/jsonl/json)

use anyhow::Result;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod flows;

/// Send diagnostics to stderr; `RUST_LOG` overrides the flag-derived level
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let (cli, ignored) = cli::Cli::parse_lenient();
    init_logging(cli.verbose, cli.quiet);
    cli::run(cli, &ignored)
}
