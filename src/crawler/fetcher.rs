//! HTTP fetcher
//!
//! One shared client performs all page retrievals for a run. A failed
//! fetch is terminal for that one URL only: there is no retry here, and
//! callers fold failures into their per-unit results.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// A per-URL fetch failure
///
/// Never fatal to the run; the engines collapse it into the same outcome
/// as an extraction miss.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Shared HTTP client for one crawl run
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds the client with the run's User-Agent and timeouts
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Retrieves `url`, returning the body on a 2xx response
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }
}
