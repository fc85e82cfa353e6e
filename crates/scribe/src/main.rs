//! scribe CLI binary.
//!
//! Runs the research → script pipeline against a local Ollama server:
//! - `scribe` generates a script for the default topic and prints previews
//! - `scribe generate --topic <T> [--json]` picks the topic and output form
//! - `scribe check` and `scribe models` inspect the server
//!
//! The process always exits with status 0; failures are reported on stderr.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = cli::Cli::parse();

    dotenvy::dotenv().ok();

    if let Err(e) = scribe::init_telemetry(cli.verbose) {
        eprintln!("{}", e);
    }

    if let Err(e) = cli::dispatch(cli).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
    }
}
