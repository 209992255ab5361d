use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::registry::RangeConfig;

/// Source label reported in every successful response.
pub const SOURCE: &str = "binance";

/// Binance rejects kline requests for more than 1000 candles.
const MAX_KLINE_LIMIT: u32 = 1000;

/// One kline row reduced to the fields the dashboard needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Kline {
    pub open_time: i64,
    pub close: f64,
}

/// Rolling 24h ticker. Binance reports `quoteVolume` as a decimal string;
/// the field is treated as optional so a missing value never fails a fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker24h {
    #[serde(rename = "quoteVolume")]
    pub quote_volume: Option<String>,
}

/// Client for the Binance public market-data API.
///
/// Holds one pooled `reqwest::Client` with the per-call timeout baked in;
/// cloning shares the pool. The base URL is configurable so tests can point
/// it at a mock server.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches candle history and the 24h ticker for `symbol` concurrently.
    ///
    /// Both calls must succeed: the merged result is only meaningful with
    /// both pieces present, so a failure of either fails the whole fetch.
    /// No retries are attempted.
    pub async fn get_market_data(
        &self,
        symbol: &str,
        config: &RangeConfig,
    ) -> Result<(Vec<Kline>, Ticker24h)> {
        info!(
            "Fetching from Binance for {}: {} x {} klines + 24h ticker",
            symbol,
            config.limit,
            config.interval.as_str()
        );
        tokio::try_join!(
            self.get_klines(symbol, config.interval.as_str(), config.limit),
            self.get_ticker_24h(symbol),
        )
    }

    pub async fn get_klines(&self, symbol: &str, interval: &str, limit: u32) -> Result<Vec<Kline>> {
        let limit = limit.min(MAX_KLINE_LIMIT);
        let response = self
            .client
            .get(format!("{}/api/v3/klines", self.base_url))
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            error!(
                "Binance klines request for {} failed with status {}",
                symbol,
                response.status()
            );
            return Err(Error::UpstreamStatus(response.status().as_u16()));
        }

        let rows: Vec<Vec<Value>> = response.json().await?;
        rows.iter().map(|row| parse_kline(row)).collect()
    }

    pub async fn get_ticker_24h(&self, symbol: &str) -> Result<Ticker24h> {
        let response = self
            .client
            .get(format!("{}/api/v3/ticker/24hr", self.base_url))
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        if !response.status().is_success() {
            error!(
                "Binance 24h ticker request for {} failed with status {}",
                symbol,
                response.status()
            );
            return Err(Error::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Binance kline rows are heterogeneous arrays:
/// `[openTime, open, high, low, close, volume, closeTime, ...]`.
/// Open time is an integer (epoch ms); prices come as decimal strings.
fn parse_kline(row: &[Value]) -> Result<Kline> {
    let open_time = row
        .first()
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::UpstreamData("kline row missing open time".to_string()))?;
    let close = row
        .get(4)
        .and_then(parse_decimal)
        .ok_or_else(|| Error::UpstreamData("kline row missing close price".to_string()))?;
    Ok(Kline { open_time, close })
}

fn parse_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
