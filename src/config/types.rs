use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for a crawl run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub output: OutputConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// The run mode, selected once at start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Crawl a fixed list of article URLs from a file
    Url,
    /// Discover and crawl articles of one category, or all of them
    Type,
    /// Discover and crawl articles matching a search query
    Search,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Name of the news source to crawl (e.g. "vnexpress")
    pub source: String,

    /// Which run mode to use
    pub task: TaskKind,

    /// Size of the bounded worker pool
    #[serde(rename = "num-workers")]
    pub num_workers: usize,

    /// Number of listing/search pages to discover per category or query
    #[serde(rename = "total-pages", default = "default_total_pages")]
    pub total_pages: u32,

    /// Path to the operator-supplied URL file (task = "url")
    #[serde(rename = "urls-file")]
    pub urls_file: Option<PathBuf>,

    /// Category slug, or "all" for a full catalog sweep (task = "type")
    #[serde(rename = "article-type")]
    pub article_type: Option<String>,

    /// Search query string (task = "search")
    #[serde(rename = "search-query")]
    pub search_query: Option<String>,
}

fn default_total_pages() -> u32 {
    1
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory for URL lists and article files
    pub root: PathBuf,
}

/// User agent identification, folded into the HTTP User-Agent header
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(default = "default_ua_name")]
    pub name: String,

    #[serde(default = "default_ua_version")]
    pub version: String,

    /// Optional contact URL advertised in the header
    pub contact: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_ua_name(),
            version: default_ua_version(),
            contact: None,
        }
    }
}

fn default_ua_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_ua_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `Name/Version` or `Name/Version (+ContactURL)`.
    pub fn header_value(&self) -> String {
        match &self.contact {
            Some(contact) => format!("{}/{} (+{})", self.name, self.version, contact),
            None => format!("{}/{}", self.name, self.version),
        }
    }
}
