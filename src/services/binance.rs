//! Binance spot ticker price client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::QUOTE_ASSET;
use crate::models::indicators::PriceQuote;
use crate::services::error::{read_json, FetchError};
use crate::services::market_data::PriceProvider;

pub struct BinancePriceClient {
    client: Client,
    base_url: String,
}

impl BinancePriceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_price(&self, pair: &str) -> Result<PriceQuote, FetchError> {
        let url = format!(
            "{}/api/v3/ticker/price",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(url)
            .query(&[("symbol", pair)])
            .send()
            .await?;
        let body = read_json(response).await?;
        parse_price(&body)
    }
}

/// Trading pair for a base symbol, e.g. `btc` -> `BTCUSDT`
pub fn trading_pair(symbol: &str) -> String {
    format!("{}{}", symbol.to_uppercase(), QUOTE_ASSET)
}

/// Extract `price` from a ticker body. Binance sends it as a string; plain
/// numbers are accepted too.
pub fn parse_price(body: &Value) -> Result<PriceQuote, FetchError> {
    let raw = body.get("price").ok_or(FetchError::MissingField("price"))?;

    let price = match raw {
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FetchError::InvalidNumber(s.clone()))?,
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| FetchError::InvalidNumber(n.to_string()))?,
        other => return Err(FetchError::InvalidNumber(other.to_string())),
    };

    if !price.is_finite() {
        return Err(FetchError::InvalidNumber(raw.to_string()));
    }

    Ok(PriceQuote { price })
}

#[async_trait]
impl PriceProvider for BinancePriceClient {
    async fn get_latest_price(&self, symbol: &str) -> Result<PriceQuote, FetchError> {
        let pair = trading_pair(symbol);
        debug!(symbol = %symbol, pair = %pair, "Requesting ticker price");
        self.fetch_price(&pair).await.map_err(|e| {
            warn!(symbol = %symbol, error = %e, "Failed to get price for {}: {}", symbol, e);
            e
        })
    }
}
