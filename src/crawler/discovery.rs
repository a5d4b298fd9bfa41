//! URL discovery engine
//!
//! Drives one page-range of listing or search requests through the bounded
//! worker pool, merges the per-page URL lists and deduplicates them. A
//! page that fails to fetch contributes nothing but never aborts the other
//! pages; the `collect` at the end is the phase barrier.

use futures::stream::{self, StreamExt};
use std::collections::HashSet;

use crate::crawler::fetcher::Fetcher;
use crate::source::NewsSource;

/// What a discovery run is looking for
#[derive(Debug, Clone, Copy)]
pub enum DiscoverTarget<'a> {
    /// One category's paginated listing
    ArticleType(&'a str),
    /// Paginated search results for a query
    Search(&'a str),
}

impl<'a> DiscoverTarget<'a> {
    /// The category slug or query string; names the URL file and result
    /// directory for this discovery
    pub fn key(&self) -> &'a str {
        match self {
            DiscoverTarget::ArticleType(slug) => slug,
            DiscoverTarget::Search(query) => query,
        }
    }

    fn page_url(&self, source: &dyn NewsSource, page: u32) -> Option<String> {
        match self {
            DiscoverTarget::ArticleType(slug) => Some(source.listing_page_url(slug, page)),
            DiscoverTarget::Search(query) => source.search_page_url(query, page),
        }
    }
}

/// Discovers article URLs across pages `1..=total_pages`
///
/// Submits one unit per page through a pool of `num_workers`, then
/// deduplicates the merged results by exact string equality (first-seen
/// survives). Completion order of pages is not deterministic and no
/// ordering of the result is guaranteed.
pub async fn discover(
    source: &dyn NewsSource,
    fetcher: &Fetcher,
    target: DiscoverTarget<'_>,
    total_pages: u32,
    num_workers: usize,
) -> Vec<String> {
    let page_results: Vec<Vec<String>> = stream::iter(1..=total_pages)
        .map(|page| async move { discover_page(source, fetcher, target, page).await })
        .buffer_unordered(num_workers)
        .collect()
        .await;

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for url in page_results.into_iter().flatten() {
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }

    tracing::info!(
        "Discovered {} unique urls for '{}' across {} pages",
        urls.len(),
        target.key(),
        total_pages
    );

    urls
}

/// One discovery unit: fetch a single page and extract its article links
async fn discover_page(
    source: &dyn NewsSource,
    fetcher: &Fetcher,
    target: DiscoverTarget<'_>,
    page: u32,
) -> Vec<String> {
    let Some(page_url) = target.page_url(source, page) else {
        // The coordinator rejects unsupported search before the pool
        // starts; an empty page keeps discovery total-failure-free anyway.
        tracing::debug!("No page url for '{}' page {}", target.key(), page);
        return Vec::new();
    };

    let body = match fetcher.fetch(&page_url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Listing fetch failed: {}", e);
            return Vec::new();
        }
    };

    let urls = source.extract_listing_urls(&body);
    if urls.is_empty() {
        tracing::info!(
            "No article links found in {}, possible rate limiting, try fewer workers",
            page_url
        );
    }

    urls
}
