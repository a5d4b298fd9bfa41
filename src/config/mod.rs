//! Configuration module for newsprint
//!
//! This module handles loading, parsing, and validating TOML run
//! configuration files.
//!
//! # Example
//!
//! ```no_run
//! use newsprint::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling source: {}", config.crawl.source);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, OutputConfig, TaskKind, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
