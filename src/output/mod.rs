//! On-disk layout for crawl results
//!
//! A run's output root holds a `urls/` directory (one file of discovered
//! URLs per category or query) and result directories holding one
//! `url_<NNN>.txt` file per crawled article, zero-padded to the batch's
//! digit width.

use crate::source::Article;
use std::path::{Path, PathBuf};

/// Number of digits needed to print every index of a batch of `len` items
pub fn index_width(len: usize) -> usize {
    len.to_string().len()
}

/// File name for the article at 1-based `index`, padded to `width` digits
pub fn article_filename(index: usize, width: usize) -> String {
    format!("url_{index:0width$}.txt")
}

/// Creates the output root and its `urls/` subdirectory, returning
/// `(urls_dir, results_dir)`
pub async fn init_output_dirs(output_root: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let urls_dir = output_root.join("urls");
    tokio::fs::create_dir_all(&urls_dir).await?;
    Ok((urls_dir, output_root.to_path_buf()))
}

/// Writes one article in the canonical five-block layout
pub async fn write_article(path: &Path, article: &Article) -> std::io::Result<()> {
    tokio::fs::write(path, article.to_string()).await
}

/// Writes a discovered URL set, one URL per line
pub async fn write_url_list(path: &Path, urls: &[String]) -> std::io::Result<()> {
    tokio::fs::write(path, urls.join("\n")).await
}

/// Reads a URL file: one URL per line, trimmed, blank lines skipped
pub async fn read_url_list(path: &Path) -> std::io::Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
