//! Reshapes raw Binance payloads into the response contract.

use log::warn;

use crate::api::binance::{Kline, Ticker24h, SOURCE};
use crate::error::{Error, Result};
use crate::models::{PricePoint, PriceSeries};

/// Two-decimal display rounding for close prices (half away from zero).
fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Merges candle history and the 24h ticker into a `PriceSeries`.
///
/// Zero candles means the upstream had no usable data for the request; that
/// is an upstream failure, not an empty success. A missing or unparseable
/// `quoteVolume` only zeroes the volume field.
pub fn build_price_series(
    coin: &str,
    range: &str,
    klines: &[Kline],
    ticker: &Ticker24h,
) -> Result<PriceSeries> {
    let history: Vec<PricePoint> = klines
        .iter()
        .map(|kline| PricePoint {
            time: kline.open_time,
            price: round_price(kline.close),
        })
        .collect();

    if history.is_empty() {
        return Err(Error::UpstreamData(format!(
            "Binance returned no candles for {} ({})",
            coin, range
        )));
    }

    let volume_24h = match ticker.quote_volume.as_deref() {
        Some(raw) => match raw.parse::<f64>() {
            Ok(volume) => volume,
            Err(_) => {
                warn!("Unparseable quoteVolume {:?} for {}; defaulting to 0", raw, coin);
                0.0
            }
        },
        None => {
            warn!("24h ticker for {} has no quoteVolume; defaulting to 0", coin);
            0.0
        }
    };

    let data_points = history.len();
    Ok(PriceSeries {
        coin: coin.to_string(),
        range: range.to_string(),
        history,
        volume_24h,
        source: SOURCE.to_string(),
        data_points,
    })
}
