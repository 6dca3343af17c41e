//! Constants for coinwatch
//!
//! All configuration for the price checker is centralized here. No runtime
//! configuration file is used; display behavior comes from CLI flags and
//! compile-time constants.

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko endpoint for per-coin detail queries
pub const COINS_ENDPOINT: &str = "/coins";

/// CoinGecko endpoint for API liveness checks
pub const PING_ENDPOINT: &str = "/ping";

/// User agent for HTTP requests
pub const USER_AGENT: &str = "coinwatch/0.1.0";

/// HTTP request timeout when fetching prices (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default re-render interval for update mode (in seconds)
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 30;

/// Placeholder substituted for empty field content
pub const FIELD_PLACEHOLDER: &str = "(unknown)";
