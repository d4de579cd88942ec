//! TAAPI.io bulk indicator client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{TaapiConfig, QUOTE_ASSET};
use crate::services::error::{read_json, FetchError};
use crate::services::market_data::IndicatorProvider;

pub const EMA_PERIOD: u32 = 200;

/// Body of a `POST /bulk` request
#[derive(Clone, Serialize)]
pub struct BulkRequest {
    pub secret: String,
    pub construct: BulkConstruct,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkConstruct {
    pub exchange: String,
    pub symbol: String,
    pub interval: String,
    pub indicators: Vec<IndicatorSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSpec {
    pub indicator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

impl IndicatorSpec {
    fn named(indicator: &'static str) -> Self {
        Self {
            indicator,
            period: None,
        }
    }

    fn with_period(indicator: &'static str, period: u32) -> Self {
        Self {
            indicator,
            period: Some(period),
        }
    }
}

pub struct TaapiClient {
    client: Client,
    config: TaapiConfig,
}

impl TaapiClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(config: TaapiConfig, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: TaapiConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Build the bulk request for `symbol`: RSI, EMA(200) and StochRSI.
    pub fn bulk_request(&self, symbol: &str) -> BulkRequest {
        BulkRequest {
            secret: self.config.secret.clone(),
            construct: BulkConstruct {
                exchange: self.config.exchange.clone(),
                symbol: format!("{}/{}", symbol, QUOTE_ASSET),
                interval: self.config.interval.clone(),
                indicators: vec![
                    IndicatorSpec::named("rsi"),
                    IndicatorSpec::with_period("ema", EMA_PERIOD),
                    IndicatorSpec::named("stochrsi"),
                ],
            },
        }
    }

    fn bulk_url(&self) -> String {
        format!("{}/bulk", self.config.base_url.trim_end_matches('/'))
    }

    async fn post_bulk(&self, symbol: &str) -> Result<Value, FetchError> {
        let request = self.bulk_request(symbol);
        let response = self
            .client
            .post(self.bulk_url())
            .json(&request)
            .send()
            .await?;
        read_json(response).await
    }
}

#[async_trait]
impl IndicatorProvider for TaapiClient {
    async fn fetch_indicators(&self, symbol: &str) -> Result<Value, FetchError> {
        debug!(symbol = %symbol, "Requesting bulk indicators");
        self.post_bulk(symbol).await.map_err(|e| {
            warn!(symbol = %symbol, error = %e, "Failed to fetch data for {}: {}", symbol, e);
            e
        })
    }
}
