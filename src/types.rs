//! Types for the CoinGecko coin detail responses

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Full per-coin record as returned by `/coins/{id}`
///
/// Only the fields the listing renderer consumes are modeled; the API
/// returns far more and the rest is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub last_updated: String,
    /// Absent for assets without their own chain
    #[serde(default)]
    pub block_time_in_minutes: Option<f64>,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
    #[serde(default)]
    pub market_data: MarketData,
}

impl CoinDetail {
    /// Finds the first ticker quoted against the given target currency code
    pub fn ticker_for(&self, target: &str) -> Option<&Ticker> {
        self.tickers.iter().find(|t| t.target == target)
    }

    /// Parses the `last_updated` timestamp (RFC 3339 with fractional seconds)
    pub fn parsed_last_updated(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.last_updated)
    }
}

/// A base/target trading pair with its last price and volume
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub base: String,
    pub target: String,
    pub last: f64,
    pub volume: f64,
    #[serde(default)]
    pub trust_score: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// 24h price change figures from the `market_data` object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub price_change_24h: f64,
    #[serde(default)]
    pub price_change_percentage_24h: f64,
}

/// Response shape of the `/ping` liveness endpoint
#[derive(Debug, Deserialize)]
pub struct ApiPing {
    pub gecko_says: String,
}
