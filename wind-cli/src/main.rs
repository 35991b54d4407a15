//! Binary crate for the `wind` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod logging;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing_subscriber();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
