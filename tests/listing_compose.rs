//! End-to-end line composition from a raw API payload

use coinwatch::registry::CurrencyRegistry;
use coinwatch::render::{render_coin, render_message, Listing, Severity};
use coinwatch::CoinDetail;

const BITCOIN_JSON: &str = r#"{
    "id": "bitcoin",
    "symbol": "btc",
    "name": "Bitcoin",
    "last_updated": "2020-03-14T09:26:53.589Z",
    "block_time_in_minutes": 10.0,
    "tickers": [
        {"base": "BTC", "target": "USD", "last": 5400.25, "volume": 9876.5432,
         "trust_score": "green", "timestamp": "2020-03-14T09:20:00+00:00"},
        {"base": "BTC", "target": "EUR", "last": 4800.0, "volume": 120.5,
         "trust_score": "green", "timestamp": "2020-03-14T09:20:00+00:00"}
    ],
    "market_data": {
        "price_change_24h": 55.1,
        "price_change_percentage_24h": 1.03
    }
}"#;

fn decoded() -> CoinDetail {
    serde_json::from_str(BITCOIN_JSON).expect("fixture must decode")
}

#[test]
fn maximum_listing_renders_every_column_at_its_width() {
    let listing = Listing {
        color: false,
        ..Listing::maximum()
    };
    let currencies = CurrencyRegistry::builtin();
    let line = render_coin(&decoded(), &listing, &currencies).unwrap();

    let w = &listing.widths;
    let total = w.symbol + w.name + w.price + w.last_updated + w.volume + w.block_time;
    assert_eq!(line.chars().count(), total);

    assert!(line.contains("btc"));
    assert!(line.contains("Bitcoin"));
    assert!(line.contains("$5400.25 (+1.03%/24h)"));
    assert!(line.contains("UPD:14 Mar 20"));
    assert!(line.contains("VOL:9876.5432"));
    assert!(line.contains("BT:10.0"));
}

#[test]
fn symbol_column_is_stable_across_targets() {
    let currencies = CurrencyRegistry::builtin();
    let usd = Listing {
        color: false,
        ..Listing::default()
    };
    let eur = Listing {
        color: false,
        target: "EUR".to_string(),
        ..Listing::default()
    };
    let usd_line = render_coin(&decoded(), &usd, &currencies).unwrap();
    let eur_line = render_coin(&decoded(), &eur, &currencies).unwrap();

    // Same column layout regardless of which ticker matched
    assert_eq!(usd_line.chars().count(), eur_line.chars().count());
    assert!(eur_line.contains("€4800.00"));
}

#[test]
fn fatal_message_line_carries_the_error_badge() {
    let listing = Listing {
        color: false,
        ..Listing::default()
    };
    let line = render_message(
        "HTTP request did not complete successfully",
        Severity::Fatal,
        &listing,
    );
    assert!(line.contains("error"));
    assert!(line.contains("HTTP request did not complete successfully"));
}
