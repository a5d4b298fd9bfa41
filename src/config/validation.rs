use crate::config::types::{Config, CrawlConfig, TaskKind, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Runs before any worker pool is created; a failure here aborts the
/// process rather than surfacing mid-run.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_user_agent_config(&config.user_agent)?;

    if config.output.root.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output root cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawl configuration, including task-specific required fields
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.source.is_empty() {
        return Err(ConfigError::Validation("source cannot be empty".to_string()));
    }

    if config.num_workers < 1 || config.num_workers > 100 {
        return Err(ConfigError::Validation(format!(
            "num_workers must be between 1 and 100, got {}",
            config.num_workers
        )));
    }

    if config.total_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "total_pages must be >= 1, got {}",
            config.total_pages
        )));
    }

    match config.task {
        TaskKind::Url => {
            if config.urls_file.is_none() {
                return Err(ConfigError::Validation(
                    "task \"url\" requires urls-file".to_string(),
                ));
            }
        }
        TaskKind::Type => match config.article_type.as_deref() {
            None | Some("") => {
                return Err(ConfigError::Validation(
                    "task \"type\" requires article-type (a slug or \"all\")".to_string(),
                ));
            }
            Some(_) => {}
        },
        TaskKind::Search => match config.search_query.as_deref() {
            None | Some("") => {
                return Err(ConfigError::Validation(
                    "task \"search\" requires a non-empty search-query".to_string(),
                ));
            }
            Some(_) => {}
        },
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if let Some(contact) = &config.contact {
        Url::parse(contact).map_err(|e| {
            ConfigError::Validation(format!("Invalid user-agent contact URL '{}': {}", contact, e))
        })?;
    }

    Ok(())
}
