//! Crawl engines and orchestration
//!
//! This module contains the source-agnostic crawl core:
//! - HTTP fetching with a shared client
//! - URL discovery over paginated listing/search pages
//! - Batch crawling of a fixed URL set
//! - Run coordination across the three task modes

mod batch;
mod coordinator;
mod discovery;
mod fetcher;

pub use batch::{crawl_batch, CrawlResult};
pub use coordinator::{run_crawl, Coordinator};
pub use discovery::{discover, DiscoverTarget};
pub use fetcher::{FetchError, Fetcher};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
///
/// Main entry point: resolves the configured source, runs discovery and
/// batch crawling per the task mode, and returns the failed-URL list.
pub async fn crawl(config: Config) -> Result<Vec<String>> {
    run_crawl(config).await
}
