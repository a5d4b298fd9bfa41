//! Batch crawl engine
//!
//! Drives a fixed set of article URLs through the bounded worker pool.
//! Each unit fetches, extracts, and writes one article file; fetch errors
//! and extraction misses become `Failure` values collected into the
//! batch's failure list, while a filesystem write error is fatal to the
//! whole run.

use futures::stream::{self, StreamExt};
use std::path::Path;

use crate::crawler::fetcher::Fetcher;
use crate::output;
use crate::source::NewsSource;
use crate::NewsprintError;

/// Outcome of one crawl unit
#[derive(Debug)]
pub enum CrawlResult {
    /// Article file written
    Success,
    /// Fetch error or extraction miss; no file written
    Failure { url: String },
}

/// Crawls `urls` into `output_dir`, returning the URLs that failed
///
/// Creates `output_dir` if absent. Filenames share one zero-padding width
/// computed from the batch size, so a 150-URL batch yields `url_001.txt`
/// through `url_150.txt`. Failures are isolated per URL and never cancel
/// sibling units; the final `collect` is the batch barrier.
pub async fn crawl_batch(
    source: &dyn NewsSource,
    fetcher: &Fetcher,
    urls: &[String],
    output_dir: &Path,
    num_workers: usize,
) -> Result<Vec<String>, NewsprintError> {
    tokio::fs::create_dir_all(output_dir).await?;

    let width = output::index_width(urls.len());

    let results: Vec<Result<CrawlResult, NewsprintError>> =
        stream::iter(urls.iter().enumerate())
            .map(|(i, url)| async move {
                crawl_one(source, fetcher, url, output_dir, i + 1, width).await
            })
            .buffer_unordered(num_workers)
            .collect()
            .await;

    let mut failed_urls = Vec::new();
    for result in results {
        if let CrawlResult::Failure { url } = result? {
            failed_urls.push(url);
        }
    }

    tracing::info!(
        "Crawled {} of {} urls into {}",
        urls.len() - failed_urls.len(),
        urls.len(),
        output_dir.display()
    );

    Ok(failed_urls)
}

/// One crawl unit: fetch, extract, and write the article at `index`
async fn crawl_one(
    source: &dyn NewsSource,
    fetcher: &Fetcher,
    url: &str,
    output_dir: &Path,
    index: usize,
    width: usize,
) -> Result<CrawlResult, NewsprintError> {
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Crawling unsuccessful: {}", e);
            return Ok(CrawlResult::Failure { url: url.to_string() });
        }
    };

    let Some(article) = source.extract_article(url, &body) else {
        tracing::debug!("No extractable article content in {}", url);
        return Ok(CrawlResult::Failure { url: url.to_string() });
    };

    let path = output_dir.join(output::article_filename(index, width));
    output::write_article(&path, &article).await?;

    Ok(CrawlResult::Success)
}
