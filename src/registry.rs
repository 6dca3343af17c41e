//! Static coin and currency lookup tables
//!
//! The tables are immutable data constructed once at startup and passed by
//! reference into the app, never process-wide mutable state. The builtin
//! set mirrors what the CoinGecko coin detail endpoint is known to serve
//! reliably; it is not exhaustive.

use std::collections::BTreeMap;

/// Builtin coin symbol -> CoinGecko id table
const BUILTIN_COINS: &[(&str, &str)] = &[
    ("btc", "bitcoin"),
    ("eth", "ethereum"),
    ("xrp", "ripple"),
    ("bch", "bitcoin-cash"),
    ("ltc", "litecoin"),
    ("eos", "eos"),
    ("bnb", "binancecoin"),
    ("bsv", "bitcoin-cash-sv"),
];

/// Builtin currency code -> (prefix symbol, display name) table
const BUILTIN_CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "$", "United States dollar"),
    ("GBP", "£", "Pound sterling"),
    ("JPY", "¥", "Japanese yen"),
    ("EUR", "€", "Euro"),
    ("BTC", "btc", "Bitcoin"),
];

/// Mapping of coin symbols to CoinGecko API ids
#[derive(Debug, Clone)]
pub struct CoinRegistry {
    coins: BTreeMap<String, String>,
}

impl CoinRegistry {
    /// Builds the registry from the builtin table
    pub fn builtin() -> Self {
        let coins = BUILTIN_COINS
            .iter()
            .map(|(symbol, id)| (symbol.to_string(), id.to_string()))
            .collect();
        Self { coins }
    }

    /// Case-insensitive symbol lookup, returning the CoinGecko id
    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.coins.get(&symbol.to_lowercase()).map(String::as_str)
    }

    /// Iterates (symbol, id) pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.coins.iter().map(|(s, i)| (s.as_str(), i.as_str()))
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

/// Display attributes of a target currency
#[derive(Debug, Clone)]
pub struct CurrencyInfo {
    /// Prefix printed before the price figure ("$", "¥", ...)
    pub symbol: String,
    /// Human-readable currency name
    pub name: String,
}

/// Mapping of target currency codes to display attributes
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<String, CurrencyInfo>,
}

impl CurrencyRegistry {
    /// Builds the registry from the builtin table
    pub fn builtin() -> Self {
        let currencies = BUILTIN_CURRENCIES
            .iter()
            .map(|(code, symbol, name)| {
                (
                    code.to_string(),
                    CurrencyInfo {
                        symbol: symbol.to_string(),
                        name: name.to_string(),
                    },
                )
            })
            .collect();
        Self { currencies }
    }

    /// Case-insensitive code lookup
    pub fn lookup(&self, code: &str) -> Option<&CurrencyInfo> {
        self.currencies.get(&code.to_uppercase())
    }

    /// Prefix symbol for a currency code, empty when unknown
    pub fn prefix(&self, code: &str) -> &str {
        self.lookup(code).map(|c| c.symbol.as_str()).unwrap_or("")
    }

    /// Iterates (code, info) pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CurrencyInfo)> {
        self.currencies.iter().map(|(c, i)| (c.as_str(), i))
    }
}
