use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::types::OrderBookPage;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("unexpected HTTP status: {0}")]
    BadStatus(StatusCode),
}

/// One-shot source of order book pages: exactly one success or one failure
/// per call, never a stream.
#[async_trait]
pub trait OrderBookSource {
    async fn fetch_order_book(&self) -> Result<Vec<OrderBookPage>, FetchError>;
}

/// REST client for the order book endpoint.
pub struct RestClient {
    url: String,
    client: Client,
}

impl RestClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl OrderBookSource for RestClient {
    // Every call is a fresh GET; no retry, no caching, no local recovery.
    // Transport and decode failures pass through to the caller unchanged.
    async fn fetch_order_book(&self) -> Result<Vec<OrderBookPage>, FetchError> {
        debug!("Fetching order book from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status));
        }

        Ok(response.json().await?)
    }
}
