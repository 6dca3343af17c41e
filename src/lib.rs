//! # coinwatch
//!
//! Crypto coin price checker for the terminal. Fetches per-coin data from
//! the CoinGecko API and prints fixed-width, optionally color-coded ticker
//! lines, one per requested symbol.
//!
//! ## Usage
//!
//! ```no_run
//! use coinwatch::registry::CurrencyRegistry;
//! use coinwatch::render::{render_coin, Listing};
//! use coinwatch::CoinGeckoClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CoinGeckoClient::new()?;
//! let coin = client.fetch_coin("bitcoin").await?;
//!
//! let listing = Listing::default();
//! let currencies = CurrencyRegistry::builtin();
//! println!("{}", render_coin(&coin, &listing, &currencies)?);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod client;
pub mod constants;
pub mod error;
pub mod registry;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use cli::Cli;
pub use client::CoinGeckoClient;
pub use error::{AppError, ClientError};
pub use registry::{CoinRegistry, CurrencyRegistry};
pub use render::{Listing, Style};
pub use types::{CoinDetail, MarketData, Ticker};
