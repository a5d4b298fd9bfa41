//! Newsprint main entry point
//!
//! Command-line interface for the newsprint news article crawler.

use anyhow::Context;
use clap::Parser;
use newsprint::config::{load_config_with_hash, Config, TaskKind};
use newsprint::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Newsprint: a concurrent news article crawler
///
/// Discovers article URLs from category listings or search results,
/// fetches and extracts each article with a bounded worker pool, and
/// writes the results to disk organized by category or query.
#[derive(Parser, Debug)]
#[command(name = "newsprint")]
#[command(version)]
#[command(about = "A concurrent news article crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let failed_urls = crawl(config).await.context("crawl failed")?;

    if !failed_urls.is_empty() {
        tracing::warn!(
            "Run completed with {} failed urls (reported, not fatal)",
            failed_urls.len()
        );
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("newsprint=info,warn"),
            1 => EnvFilter::new("newsprint=debug,info"),
            2 => EnvFilter::new("newsprint=trace,debug"),
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

/// Handles --dry-run: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Newsprint Dry Run ===\n");

    println!("Crawl Configuration:");
    println!("  Source: {}", config.crawl.source);
    println!("  Workers: {}", config.crawl.num_workers);
    println!("  Pages per category/query: {}", config.crawl.total_pages);

    match config.crawl.task {
        TaskKind::Url => {
            if let Some(path) = &config.crawl.urls_file {
                println!("  Task: crawl url list from {}", path.display());
            }
        }
        TaskKind::Type => {
            if let Some(article_type) = &config.crawl.article_type {
                println!("  Task: crawl category '{}'", article_type);
            }
        }
        TaskKind::Search => {
            if let Some(query) = &config.crawl.search_query {
                println!("  Task: crawl search results for '{}'", query);
            }
        }
    }

    println!("\nOutput:");
    println!("  Root: {}", config.output.root.display());

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\n✓ Configuration is valid");
}
