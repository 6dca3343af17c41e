//! Application driver: fetch, decode, render per requested symbol

use crate::{
    cli::Cli,
    client::CoinGeckoClient,
    error::AppError,
    registry::{CoinRegistry, CurrencyRegistry},
    render::{listing, Listing, Severity},
};
use std::fs;
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;

/// Top-level application state
///
/// The registries are immutable configuration built once at startup; the
/// listing captures all flag-derived display settings.
pub struct App {
    client: CoinGeckoClient,
    coins: CoinRegistry,
    currencies: CurrencyRegistry,
    listing: Listing,
}

/// Builds the display configuration from defaults plus flag overrides.
///
/// Returns the listing and, when the requested target currency is unknown,
/// a warning message; the listing then keeps the default target.
pub fn listing_from_cli(cli: &Cli, currencies: &CurrencyRegistry) -> (Listing, Option<String>) {
    let mut listing = if cli.maximum {
        Listing::maximum()
    } else {
        Listing::default()
    };
    if cli.block_time {
        listing.block_time = true;
    }
    if cli.no_color {
        listing.color = false;
    }
    if cli.no_name {
        listing.name = false;
    }
    if cli.no_time {
        listing.last_updated = false;
    }
    if cli.volume {
        listing.volume = true;
    }

    let target = cli.target.to_uppercase();
    let warning = if currencies.lookup(&target).is_some() {
        listing.target = target;
        None
    } else {
        Some(format!(
            "Unknown target currency: {}; using default.",
            target
        ))
    };
    (listing, warning)
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self, AppError> {
        let coins = CoinRegistry::builtin();
        let currencies = CurrencyRegistry::builtin();
        let (listing, warning) = listing_from_cli(cli, &currencies);
        if let Some(text) = warning {
            warn_with(&listing, &text);
        }
        let client = CoinGeckoClient::new()?;
        Ok(Self {
            client,
            coins,
            currencies,
            listing,
        })
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Runs the requested actions; returns Err only on fatal conditions
    pub async fn run(&self, cli: &Cli) -> Result<(), AppError> {
        if cli.list_coins {
            self.list_coins();
        }
        if cli.list_currencies {
            self.list_currencies();
        }
        if cli.ping {
            let msg = self.client.ping().await?;
            self.warn(&format!("API has responded: {}", msg));
        }

        if cli.all {
            if cli.update_mode {
                return Err(AppError::AllInUpdateMode);
            }
            self.render_all().await?;
            return Ok(());
        }

        let symbols = self.collect_symbols(cli)?;
        if symbols.is_empty() {
            return Ok(());
        }
        self.run_once_or_update(&symbols, cli.update_mode, cli.update_duration)
            .await
    }

    /// Symbols from --symbols-from-file first, then positional arguments
    fn collect_symbols(&self, cli: &Cli) -> Result<Vec<String>, AppError> {
        let mut symbols = Vec::new();
        if let Some(path) = &cli.symbols_from_file {
            let contents =
                fs::read_to_string(path).map_err(|e| AppError::symbol_file(path, e))?;
            symbols.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from),
            );
        }
        symbols.extend(cli.symbols.iter().cloned());
        Ok(symbols)
    }

    /// Sequential fetch-and-render loop, optionally repeating.
    ///
    /// In update mode the screen is cleared and the whole set re-rendered
    /// every `duration_secs`; Ctrl-C leaves the loop cleanly.
    async fn run_once_or_update(
        &self,
        symbols: &[String],
        update: bool,
        duration_secs: u64,
    ) -> Result<(), AppError> {
        loop {
            if update {
                clear_screen();
                self.warn(&format!(
                    "You are running coinwatch in update mode. Will update every {} seconds.",
                    duration_secs
                ));
            }
            for symbol in symbols {
                match self.coins.lookup(symbol) {
                    None => self.warn(&format!("Unknown coin symbol '{}'", symbol)),
                    Some(id) => {
                        let coin = self.client.fetch_coin(id).await?;
                        let line = listing::render_coin(&coin, &self.listing, &self.currencies)?;
                        if !line.is_empty() {
                            println!("{}", line);
                        }
                        println!();
                    }
                }
            }
            if !update {
                return Ok(());
            }
            tokio::select! {
                _ = sleep(Duration::from_secs(duration_secs)) => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!("Interrupt received, leaving update mode");
                    return Ok(());
                }
            }
        }
    }

    /// Renders every coin in the registry; individual fetch failures are
    /// reported inline and the rest of the set still renders
    async fn render_all(&self) -> Result<(), AppError> {
        for (symbol, id) in self.coins.iter() {
            match self.client.fetch_coin(id).await {
                Ok(coin) => {
                    let line = listing::render_coin(&coin, &self.listing, &self.currencies)?;
                    if !line.is_empty() {
                        println!("{}", line);
                    }
                    println!();
                }
                Err(e) => {
                    tracing::warn!(symbol, error = %e, "Fetch failed");
                    self.warn(&format!("Could not fetch listing for '{}'", symbol));
                }
            }
        }
        Ok(())
    }

    fn list_coins(&self) {
        println!("Available coins:");
        for (i, (symbol, id)) in self.coins.iter().enumerate() {
            println!("{}\t{}\t{}", i, symbol, id);
        }
    }

    fn list_currencies(&self) {
        println!("Available currencies:");
        for (i, (code, info)) in self.currencies.iter().enumerate() {
            println!("{}\t{}\t{}\t{}", i, code, info.symbol, info.name);
        }
    }

    fn warn(&self, text: &str) {
        warn_with(&self.listing, text);
    }
}

fn warn_with(listing: &Listing, text: &str) {
    println!(
        "{}",
        listing::render_message(text, Severity::Warning, listing)
    );
}

fn clear_screen() {
    // ANSI erase display + cursor home
    print!("\u{1b}[2J\u{1b}[1;1H");
    let _ = std::io::stdout().flush();
}
