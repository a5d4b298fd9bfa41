//! Run coordinator
//!
//! Interprets the configured run mode, sequences discovery and batch
//! crawling, and aggregates failure lists. Discovery for a category or
//! query always completes (including persisting its URL file) before
//! that category's batch crawl begins, and a category sweep runs its
//! categories strictly sequentially so no more than `num_workers` requests
//! are ever in flight.

use std::path::Path;

use crate::config::{Config, TaskKind};
use crate::crawler::batch::crawl_batch;
use crate::crawler::discovery::{discover, DiscoverTarget};
use crate::crawler::fetcher::Fetcher;
use crate::output;
use crate::source::{create_source, NewsSource};
use crate::{ConfigError, NewsprintError, Result};

/// Orchestrates one crawl run
pub struct Coordinator {
    source: Box<dyn NewsSource>,
    fetcher: Fetcher,
    config: Config,
}

impl Coordinator {
    /// Creates a coordinator for the source named in the configuration
    pub fn new(config: Config) -> Result<Self> {
        let source = create_source(&config.crawl.source)?;
        Self::with_source(source, config)
    }

    /// Creates a coordinator around an explicitly supplied source
    ///
    /// This is the seam for sources not in the built-in registry.
    pub fn with_source(source: Box<dyn NewsSource>, config: Config) -> Result<Self> {
        if config.crawl.task == TaskKind::Search {
            let query = config.crawl.search_query.as_deref().unwrap_or_default();
            if source.search_page_url(query, 1).is_none() {
                return Err(NewsprintError::SearchUnsupported(source.name().to_string()));
            }
        }

        let fetcher = Fetcher::new(&config.user_agent.header_value())?;

        Ok(Self {
            source,
            fetcher,
            config,
        })
    }

    /// Runs the configured task to completion
    ///
    /// Returns the list of URLs that failed to crawl. Per-URL failures are
    /// reported, never fatal; only configuration and filesystem write
    /// errors abort the run.
    pub async fn run(&self) -> Result<Vec<String>> {
        let failed_urls = match self.config.crawl.task {
            TaskKind::Url => self.crawl_url_list().await?,
            TaskKind::Type => self.crawl_types().await?,
            TaskKind::Search => self.crawl_search().await?,
        };

        tracing::info!("Number of failed urls: {}", failed_urls.len());

        Ok(failed_urls)
    }

    /// Task "url": crawl a fixed list of article URLs from the operator's file
    async fn crawl_url_list(&self) -> Result<Vec<String>> {
        let urls_file = self.config.crawl.urls_file.as_deref().ok_or_else(|| {
            ConfigError::Validation("task \"url\" requires urls-file".to_string())
        })?;

        tracing::info!("Start crawling urls from {}", urls_file.display());
        let urls = output::read_url_list(urls_file).await?;

        crawl_batch(
            self.source.as_ref(),
            &self.fetcher,
            &urls,
            &self.config.output.root,
            self.config.crawl.num_workers,
        )
        .await
    }

    /// Task "type": one category, or the full catalog in index order
    async fn crawl_types(&self) -> Result<Vec<String>> {
        let article_type = self.config.crawl.article_type.as_deref().ok_or_else(|| {
            ConfigError::Validation("task \"type\" requires article-type".to_string())
        })?;

        let (urls_dir, results_dir) = output::init_output_dirs(&self.config.output.root).await?;

        if article_type == "all" {
            self.crawl_all_types(&urls_dir, &results_dir).await
        } else {
            self.crawl_one_key(DiscoverTarget::ArticleType(article_type), &urls_dir, &results_dir)
                .await
        }
    }

    /// Sweeps every catalog category sequentially, accumulating failures
    async fn crawl_all_types(&self, urls_dir: &Path, results_dir: &Path) -> Result<Vec<String>> {
        let mut total_failed = Vec::new();

        for article_type in self.source.article_types() {
            let failed = self
                .crawl_one_key(DiscoverTarget::ArticleType(article_type), urls_dir, results_dir)
                .await?;
            tracing::info!("Number of failed {} urls: {}", article_type, failed.len());
            total_failed.extend(failed);
        }

        Ok(total_failed)
    }

    /// Task "search": discover and crawl results for the operator's query
    async fn crawl_search(&self) -> Result<Vec<String>> {
        let query = self.config.crawl.search_query.as_deref().ok_or_else(|| {
            ConfigError::Validation("task \"search\" requires search-query".to_string())
        })?;

        let (urls_dir, results_dir) = output::init_output_dirs(&self.config.output.root).await?;

        self.crawl_one_key(DiscoverTarget::Search(query), &urls_dir, &results_dir)
            .await
    }

    /// Discovery then batch crawl for one category or query
    ///
    /// The discovered set is persisted to `urls/<key>.txt` before the
    /// batch crawl starts, so a later url-mode rerun can reuse it without
    /// re-discovering.
    async fn crawl_one_key(
        &self,
        target: DiscoverTarget<'_>,
        urls_dir: &Path,
        results_dir: &Path,
    ) -> Result<Vec<String>> {
        let key = target.key();
        tracing::info!("Getting urls of '{}'", key);

        let urls = discover(
            self.source.as_ref(),
            &self.fetcher,
            target,
            self.config.crawl.total_pages,
            self.config.crawl.num_workers,
        )
        .await;

        let urls_file = urls_dir.join(format!("{key}.txt"));
        output::write_url_list(&urls_file, &urls).await?;

        tracing::info!("Crawling from urls of '{}'", key);
        crawl_batch(
            self.source.as_ref(),
            &self.fetcher,
            &urls,
            &results_dir.join(key),
            self.config.crawl.num_workers,
        )
        .await
    }
}

/// Runs a complete crawl for the given configuration
pub async fn run_crawl(config: Config) -> Result<Vec<String>> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
