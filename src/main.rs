//! DocSleuth — estimate-documentation classifier.
//!
//! Thin binary entry point. All logic lives in the `docsleuth-core`
//! and `docsleuth-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = docsleuth_cli::args::Cli::parse();

    // Initialise structured logging. Logs go to stderr so tables and CSV
    // output on stdout stay clean.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("DocSleuth starting");

    docsleuth_cli::run(cli)
}
