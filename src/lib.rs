//! Newsprint: a concurrent news article crawler
//!
//! This crate discovers article URLs from paginated category listings or
//! search results, fetches and extracts each article with a bounded worker
//! pool, and writes the results to disk organized by category or query.
//! Site-specific extraction lives behind the [`source::NewsSource`] trait;
//! everything else is source-agnostic.

pub mod config;
pub mod crawler;
pub mod output;
pub mod source;

use thiserror::Error;

/// Main error type for newsprint operations
///
/// Per-URL fetch and extraction failures never appear here; they are
/// collected into the batch's failure list. This type covers the conditions
/// that abort a run: bad configuration and filesystem write errors.
#[derive(Debug, Error)]
pub enum NewsprintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("Source '{0}' does not support search")]
    SearchUnsupported(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for newsprint operations
pub type Result<T> = std::result::Result<T, NewsprintError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, TaskKind};
pub use source::{create_source, Article, NewsSource};
