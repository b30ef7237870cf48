// src/cli.rs
//! Command-line surface: argument parsing plus the one-shot run glue.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cache::UrlCache;
use crate::config::PipelineConfig;
use crate::dataset;
use crate::pipeline::{self, fetcher::CachedPageSource};
use crate::report;

/// Preprocess a JSON training set: fetch every URL, strip boilerplate, and
/// attach normalized page text.
#[derive(Debug, Parser)]
#[command(name = "trainset-builder", version, about)]
pub struct Cli {
    /// Path to the JSON training set file.
    pub infile: PathBuf,

    /// Path to write the processed training set (defaults to stdout).
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Response cache location override.
    #[arg(long)]
    pub cache: Option<PathBuf>,
}

/// Run the whole pipeline once: load, fetch/clean, report, serialize.
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = PipelineConfig::load()?;
    if let Some(path) = cli.cache {
        config.cache_path = path;
    }

    let records = dataset::load_records(&cli.infile)?;
    let cache = UrlCache::open(&config.cache_path);
    let source = CachedPageSource::new(&config, cache)?;

    let processed = pipeline::process_records(records, &source).await;

    // Report goes to stderr; only the document itself may touch stdout.
    eprint!("{}", report::render_report(&processed));

    let json = dataset::to_json_pretty(&processed)?;
    match cli.outfile {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut w = BufWriter::new(file);
            w.write_all(json.as_bytes())?;
            w.flush()?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(json.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
