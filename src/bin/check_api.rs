//! Standalone connectivity probe for the Binance endpoints this service
//! depends on. Operator diagnostic only, not part of the API contract.
//!
//! Run with `cargo run --bin check_api`.

use anyhow::Result;
use serde_json::Value;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("Testing Binance klines...");
    match client
        .get("https://api.binance.com/api/v3/klines")
        .query(&[("symbol", "BTCUSDT"), ("interval", "1h"), ("limit", "24")])
        .send()
        .await
    {
        Ok(resp) => {
            println!("Binance klines status: {}", resp.status());
            if resp.status().is_success() {
                let rows: Vec<Value> = resp.json().await?;
                println!("  data points: {}", rows.len());
            }
        }
        Err(e) => println!("Binance klines error: {}", e),
    }

    println!();
    println!("Testing Binance 24h ticker...");
    match client
        .get("https://api.binance.com/api/v3/ticker/24hr")
        .query(&[("symbol", "BTCUSDT")])
        .send()
        .await
    {
        Ok(resp) => {
            println!("Binance ticker status: {}", resp.status());
            if resp.status().is_success() {
                let ticker: Value = resp.json().await?;
                let volume = ticker
                    .get("quoteVolume")
                    .and_then(Value::as_str)
                    .unwrap_or("<missing>");
                println!("  quoteVolume: {}", volume);
            }
        }
        Err(e) => println!("Binance ticker error: {}", e),
    }

    Ok(())
}
