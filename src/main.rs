//! Training-set preprocessor — binary entrypoint.
//! Parses the CLI, boots tracing, and runs the fetch/clean pipeline.
//!
//! The first run against a training set can take a while: every URL goes out
//! to the network. Later runs replay from the response cache.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trainset_builder::cli::{execute, Cli};

/// Compact tracing to stderr so log lines never mix into JSON on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = execute(cli).await {
        tracing::error!(error = ?e, "run failed");
        std::process::exit(1);
    }
}
