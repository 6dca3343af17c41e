//! CoinGecko API client

use crate::{
    constants::{COINGECKO_API_URL, COINS_ENDPOINT, PING_ENDPOINT, REQUEST_TIMEOUT_SECS, USER_AGENT},
    error::ClientError,
    types::{ApiPing, CoinDetail},
};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the CoinGecko v3 API
///
/// Fetches are sequential and blocking from the caller's point of view;
/// there is no retry or backoff, a failed request is just reported.
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Creates a client against the production API
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(COINGECKO_API_URL)
    }

    /// Creates a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches the full detail record for one coin id
    pub async fn fetch_coin(&self, id: &str) -> Result<CoinDetail, ClientError> {
        let body = self.get(&format!("{}/{}", COINS_ENDPOINT, id)).await?;
        serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse coin response: {}", e))
        })
    }

    /// Pings the API and returns its greeting message
    pub async fn ping(&self) -> Result<String, ClientError> {
        let body = self.get(PING_ENDPOINT).await?;
        let ping: ApiPing = serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse ping response: {}", e))
        })?;
        Ok(ping.gecko_says)
    }

    async fn get(&self, path: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Fetching from CoinGecko");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Network)?;

        if response.status().as_u16() == 429 {
            return Err(ClientError::RateLimited);
        }

        if !response.status().is_success() {
            return Err(ClientError::Api {
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(ClientError::Network)
    }
}
