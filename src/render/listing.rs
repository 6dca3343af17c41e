//! Listing configuration and line composition

use crate::{
    constants::FIELD_PLACEHOLDER,
    error::AppError,
    registry::CurrencyRegistry,
    render::column::{self, Align, Field, NumberFormat},
    render::style::Style,
    types::CoinDetail,
};

/// Column widths for each listing field, in printable character positions
#[derive(Debug, Clone)]
pub struct Widths {
    pub symbol: usize,
    pub name: usize,
    pub price: usize,
    pub last_updated: usize,
    pub volume: usize,
    pub block_time: usize,
    /// Badge cell used by warning and error messages
    pub badge: usize,
}

impl Default for Widths {
    fn default() -> Self {
        Self {
            symbol: 9,
            name: 25,
            price: 28,
            last_updated: 27,
            volume: 18,
            block_time: 11,
            badge: 9,
        }
    }
}

/// Which fields a listing shows and how
///
/// Immutable per render call; built once from defaults plus flag overrides.
#[derive(Debug, Clone)]
pub struct Listing {
    pub symbol: bool,
    pub name: bool,
    pub last_updated: bool,
    pub volume: bool,
    pub block_time: bool,
    pub color: bool,
    /// Target currency code prices are quoted in
    pub target: String,
    pub widths: Widths,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            symbol: true,
            name: true,
            last_updated: true,
            volume: false,
            block_time: false,
            color: true,
            target: "USD".to_string(),
            widths: Widths::default(),
        }
    }
}

impl Listing {
    /// Maximal detail listing: default fields plus volume and block time
    pub fn maximum() -> Self {
        Self {
            volume: true,
            block_time: true,
            ..Self::default()
        }
    }

    /// Renders one field into a fixed-width, optionally colorized cell
    fn cell(&self, field: Field, style: Style, width: usize) -> String {
        let cell = column::fit(&field.into_text(), width, Align::Center, FIELD_PLACEHOLDER);
        if self.color {
            style.paint(&cell)
        } else {
            cell
        }
    }
}

/// Message severity for inline reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported, processing continues
    Warning,
    /// Reported, process terminates non-zero
    Fatal,
}

/// Price cell content and style for a coin against a target currency.
///
/// A coin without a ticker for the target currency yields a placeholder
/// cell rather than an error; the style follows the sign of the 24h change.
pub fn price_field(
    coin: &CoinDetail,
    target: &str,
    currencies: &CurrencyRegistry,
) -> (Field, Style) {
    match coin.ticker_for(target) {
        Some(ticker) => {
            let pct = coin.market_data.price_change_percentage_24h;
            let change_suffix = if pct != 0.0 {
                let sign = if pct >= 0.0 { "+" } else { "" };
                format!("({}{:.2}%/24h)", sign, pct)
            } else {
                String::new()
            };
            let text = format!(
                "{}{:.2} {}",
                currencies.prefix(target),
                ticker.last,
                change_suffix
            );
            (
                Field::text(text),
                Style::for_price_change(coin.market_data.price_change_24h),
            )
        }
        None => (Field::text("no price"), Style::NoPrice),
    }
}

/// Composes one aligned listing line for a coin.
///
/// Fields appear in fixed order: symbol, name, price, last-updated, volume,
/// block time; inactive fields are skipped. The caller prints a blank
/// separator line after each record.
pub fn render_coin(
    coin: &CoinDetail,
    listing: &Listing,
    currencies: &CurrencyRegistry,
) -> Result<String, AppError> {
    // A record that came back without a symbol has nothing worth rendering.
    if coin.symbol.is_empty() {
        return Ok(String::new());
    }

    let w = &listing.widths;
    let mut line = String::new();

    if listing.symbol {
        line.push_str(&listing.cell(Field::text(&coin.symbol), Style::SymbolBadge, w.symbol));
    }
    if listing.name {
        line.push_str(&listing.cell(Field::text(&coin.name), Style::CoinName, w.name));
    }

    let (price, price_style) = price_field(coin, &listing.target, currencies);
    line.push_str(&listing.cell(price, price_style, w.price));

    if listing.last_updated {
        let tm = coin.parsed_last_updated()?;
        let text = format!("UPD:{}", tm.format("%d %b %y %H:%M %Z"));
        line.push_str(&listing.cell(Field::text(text), Style::Detail, w.last_updated));
    }
    if listing.volume {
        let field = match coin.ticker_for(&listing.target) {
            Some(ticker) => Field::number(ticker.volume, NumberFormat::Volume),
            None => Field::text("no volume"),
        };
        line.push_str(&listing.cell(field, Style::Detail, w.volume));
    }
    if listing.block_time {
        let field = match coin.block_time_in_minutes {
            Some(minutes) => Field::number(minutes, NumberFormat::BlockTime),
            None => Field::text(""),
        };
        line.push_str(&listing.cell(field, Style::Detail, w.block_time));
    }

    Ok(line)
}

/// Renders a badge-prefixed user message line
pub fn render_message(text: &str, severity: Severity, listing: &Listing) -> String {
    let (badge, style) = match severity {
        Severity::Fatal => ("error", Style::ErrorBadge),
        Severity::Warning => ("attn!", Style::WarnBadge),
    };
    let mut line = listing.cell(Field::text(badge), style, listing.widths.badge);
    let width = text.chars().count() + 4;
    line.push_str(&listing.cell(Field::text(text), Style::Plain, width));
    line
}
