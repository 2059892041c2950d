//! Linkrot main entry point
//!
//! Command-line interface for the linkrot dead-link auditor.

use anyhow::Context;
use clap::Parser;
use linkrot::config::{load_config, validate_config, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkrot: a concurrent dead-link auditor
///
/// Crawls a website from the given seed URL, following same-domain links,
/// and prints every URL whose fetch fails or returns an HTTP error status.
#[derive(Parser, Debug)]
#[command(name = "linkrot")]
#[command(version)]
#[command(about = "Crawl a site and report every dead link", long_about = None)]
struct Cli {
    /// Absolute seed URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Number of concurrent fetch workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(workers) = cli.workers {
        config.crawler.workers = workers;
        validate_config(&config).context("Invalid worker count")?;
    }

    let dead_links = linkrot::crawl(&config, &cli.url)
        .await
        .context("Crawl failed")?;

    if dead_links.is_empty() {
        tracing::info!("No dead links found");
    } else {
        tracing::info!("Found {} dead links:", dead_links.len());
        for link in &dead_links {
            println!("{link}");
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkrot=info,warn"),
            1 => EnvFilter::new("linkrot=debug,info"),
            2 => EnvFilter::new("linkrot=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
