//! Outbound retrieval of the listing page.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Source of raw listing markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(config: &ServerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Fetching quake listing from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Decodes using the charset from Content-Type, UTF-8 otherwise
        let html = response
            .text()
            .await
            .map_err(|source| FetchError::Body { url: url.to_string(), source })?;

        tracing::debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let config = ServerConfig {
            fetch_timeout_secs: 2,
            ..ServerConfig::default()
        };
        let fetcher = HttpPageFetcher::new(&config).unwrap();
        // Port 9 (discard) on loopback is not expected to accept HTTP
        let err = fetcher.fetch("http://127.0.0.1:9/seismoi-lista").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }), "unexpected error: {}", err);
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://www.seismos.gr/seismoi-lista".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "https://www.seismos.gr/seismoi-lista returned HTTP 503");
    }
}
