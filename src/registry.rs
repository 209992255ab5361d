//! Fixed coin and time-range tables.
//!
//! Both tables are closed sets, read-only for the life of the process.
//! Unknown identifiers are rejected, never defaulted. The candle counts per
//! range are a presentation choice (how dense the dashboard chart should be)
//! and must stay exactly as listed for client compatibility.

/// Coin identifiers accepted by the API, in declaration order.
pub const SUPPORTED_COINS: [&str; 3] = ["bitcoin", "ethereum", "solana"];

/// Time-range tokens accepted by the API, in declaration order.
pub const SUPPORTED_RANGES: [&str; 5] = ["1h", "6h", "24h", "7d", "30d"];

/// Candle granularities used by the supported ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl Interval {
    /// The Binance-native interval token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::M5 => "5m",
            Interval::M15 => "15m",
            Interval::H1 => "1h",
            Interval::H4 => "4h",
            Interval::D1 => "1d",
        }
    }
}

/// Upstream fetch parameters for one time-range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    pub interval: Interval,
    pub limit: u32,
}

/// Maps a coin identifier to its Binance trading pair symbol.
pub fn resolve_coin(coin_id: &str) -> Option<&'static str> {
    match coin_id {
        "bitcoin" => Some("BTCUSDT"),
        "ethereum" => Some("ETHUSDT"),
        "solana" => Some("SOLUSDT"),
        _ => None,
    }
}

/// Maps a time-range token to its candle interval and count.
pub fn resolve_range(token: &str) -> Option<RangeConfig> {
    let config = match token {
        "1h" => RangeConfig { interval: Interval::M5, limit: 12 },
        "6h" => RangeConfig { interval: Interval::M15, limit: 24 },
        "24h" => RangeConfig { interval: Interval::H1, limit: 24 },
        "7d" => RangeConfig { interval: Interval::H4, limit: 42 },
        "30d" => RangeConfig { interval: Interval::D1, limit: 30 },
        _ => return None,
    };
    Some(config)
}

/// Renders the supported coins as `["bitcoin", "ethereum", "solana"]` for
/// error bodies.
pub fn coin_list() -> String {
    format_list(&SUPPORTED_COINS)
}

/// Renders the supported ranges for error bodies.
pub fn range_list() -> String {
    format_list(&SUPPORTED_RANGES)
}

fn format_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{}\"", item)).collect();
    format!("[{}]", quoted.join(", "))
}
