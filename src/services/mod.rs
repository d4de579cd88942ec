//! Clients for the external market services

pub mod binance;
pub mod error;
pub mod market_data;
pub mod taapi;

pub use binance::BinancePriceClient;
pub use error::FetchError;
pub use market_data::{IndicatorProvider, PriceProvider};
pub use taapi::TaapiClient;
