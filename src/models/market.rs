use serde::{Deserialize, Serialize};

/// One candle reduced to chart form: open time (epoch milliseconds, as
/// reported by the upstream) and the close price rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: i64,
    pub price: f64,
}

/// The sole successful response shape of `/api/price/{coin_id}`.
///
/// Built fresh per request; field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub coin: String,
    pub range: String,
    pub history: Vec<PricePoint>,
    pub volume_24h: f64,
    pub source: String,
    pub data_points: usize,
}
