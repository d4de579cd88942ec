//! Market data provider interfaces used by the signal engine.

use async_trait::async_trait;
use serde_json::Value;

use crate::models::indicators::PriceQuote;
use crate::services::error::FetchError;

#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// Fetch the raw bulk indicator response for a base symbol.
    ///
    /// The body is returned unmodified; shape checks belong to the caller.
    async fn fetch_indicators(&self, symbol: &str) -> Result<Value, FetchError>;
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Get the latest traded price for a base symbol against USDT
    async fn get_latest_price(&self, symbol: &str) -> Result<PriceQuote, FetchError>;
}
