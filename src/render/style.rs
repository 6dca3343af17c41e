//! Style tags for listing cells
//!
//! Cells carry a semantic style tag; the mapping to terminal colors lives
//! here and is only applied when color output is enabled. Tests assert on
//! the tags, never on escape sequences.

use colored::Colorize;

/// Semantic style of a rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Coin symbol badge
    SymbolBadge,
    /// Coin name
    CoinName,
    /// Price with a non-negative 24h change
    PriceUp,
    /// Price with a negative 24h change
    PriceDown,
    /// Missing ticker placeholder
    NoPrice,
    /// Secondary detail fields (update time, volume, block time)
    Detail,
    /// Fatal error badge
    ErrorBadge,
    /// Inline warning badge
    WarnBadge,
    /// Unstyled text
    Plain,
}

impl Style {
    /// Picks the price style from the 24h change figure
    pub fn for_price_change(change_24h: f64) -> Self {
        if change_24h >= 0.0 {
            Style::PriceUp
        } else {
            Style::PriceDown
        }
    }

    /// Applies this style's terminal color to `text`
    pub fn paint(self, text: &str) -> String {
        match self {
            Style::SymbolBadge => text.on_blue().to_string(),
            Style::CoinName => text.blue().to_string(),
            Style::PriceUp => text.on_green().to_string(),
            Style::PriceDown => text.on_red().to_string(),
            Style::NoPrice | Style::WarnBadge => text.on_yellow().to_string(),
            Style::Detail => text.on_bright_black().to_string(),
            Style::ErrorBadge => text.on_red().to_string(),
            Style::Plain => text.to_string(),
        }
    }
}
