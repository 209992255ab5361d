//! Per-request orchestration: validate, fetch, normalize.

use log::{error, info};

use crate::api::BinanceClient;
use crate::error::{Error, Result};
use crate::models::PriceSeries;
use crate::normalize;
use crate::registry;

/// Handles one price request end to end. Binance is the only wired provider;
/// when it fails the request fails, no fallback is attempted.
#[derive(Debug, Clone)]
pub struct PriceService {
    binance: BinanceClient,
}

impl PriceService {
    pub fn new(binance: BinanceClient) -> Self {
        Self { binance }
    }

    /// Validates `coin_id` and `range` against the registries, fetches the
    /// candle history and 24h ticker concurrently, and merges them. Invalid
    /// input is rejected before any upstream call is made.
    pub async fn get_price_series(&self, coin_id: &str, range: &str) -> Result<PriceSeries> {
        let symbol = registry::resolve_coin(coin_id)
            .ok_or_else(|| Error::InvalidCoin(registry::coin_list()))?;
        let config = registry::resolve_range(range)
            .ok_or_else(|| Error::InvalidRange(registry::range_list()))?;

        let (klines, ticker) = match self.binance.get_market_data(symbol, &config).await {
            Ok(data) => data,
            Err(e) => {
                error!("Binance fetch failed for {} ({}): {}", coin_id, range, e);
                return Err(e);
            }
        };

        let series = normalize::build_price_series(coin_id, range, &klines, &ticker)?;
        info!(
            "Binance: got {} data points for {} ({})",
            series.data_points, coin_id, range
        );
        Ok(series)
    }
}
