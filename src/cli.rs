//! CLI argument surface

use crate::constants::DEFAULT_UPDATE_INTERVAL_SECS;
use clap::Parser;
use std::path::PathBuf;

/// Crypto coin price checker, powered by the CoinGecko API
#[derive(Debug, Parser)]
#[command(name = "coinwatch", version, about, after_help = "Powered by the CoinGecko API.")]
pub struct Cli {
    /// Coin symbols to look up (e.g. btc eth xrp)
    pub symbols: Vec<String>,

    /// Yields listings for all known coins (generally not recommended)
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Includes block time in the listing, if available
    #[arg(short = 'b', long)]
    pub block_time: bool,

    /// Disables output colors
    #[arg(short = 'c', long)]
    pub no_color: bool,

    /// Sets the duration (seconds) for the rate of update mode
    #[arg(short = 'd', long, value_name = "SECS", default_value_t = DEFAULT_UPDATE_INTERVAL_SECS)]
    pub update_duration: u64,

    /// Loads a list of symbols from a text file, one symbol per line
    #[arg(short = 'f', long, value_name = "FILE")]
    pub symbols_from_file: Option<PathBuf>,

    /// Yields maximum detail listings for the selected coins
    #[arg(short = 'm', long)]
    pub maximum: bool,

    /// Omits coin name in the listing
    #[arg(short = 'n', long)]
    pub no_name: bool,

    /// Pings the CoinGecko API and shows the message
    #[arg(short = 'p', long)]
    pub ping: bool,

    /// Determines the target currency for comparison (e.g. usd, jpy)
    #[arg(short = 't', long, value_name = "CODE", default_value = "usd")]
    pub target: String,

    /// Omits last update time in the listing
    #[arg(short = 'z', long)]
    pub no_time: bool,

    /// Updates the same set of tickers every no. of seconds
    #[arg(short = 'u', long)]
    pub update_mode: bool,

    /// Includes coin volume in the listing, if available
    #[arg(short = 'v', long)]
    pub volume: bool,

    /// Displays a listing of all known coins
    #[arg(long)]
    pub list_coins: bool,

    /// Displays a listing of all known currencies
    #[arg(long)]
    pub list_currencies: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_symbols_and_flags() {
        let cli = Cli::try_parse_from(["coinwatch", "btc", "eth", "-m", "-c", "-t", "jpy"]).unwrap();
        assert_eq!(cli.symbols, vec!["btc", "eth"]);
        assert!(cli.maximum);
        assert!(cli.no_color);
        assert_eq!(cli.target, "jpy");
        assert!(!cli.update_mode);
    }

    #[test]
    fn update_duration_defaults_to_thirty_seconds() {
        let cli = Cli::try_parse_from(["coinwatch", "btc", "-u"]).unwrap();
        assert_eq!(cli.update_duration, 30);
        let cli = Cli::try_parse_from(["coinwatch", "btc", "-u", "-d", "5"]).unwrap();
        assert_eq!(cli.update_duration, 5);
    }

    #[test]
    fn list_flags_parse_without_symbols() {
        let cli = Cli::try_parse_from(["coinwatch", "--list-coins", "--list-currencies"]).unwrap();
        assert!(cli.list_coins);
        assert!(cli.list_currencies);
        assert!(cli.symbols.is_empty());
    }
}
