//! Futures Filter
//!
//! Scans the configured symbols forever and prints a line for every matched
//! opportunity. Stops on Ctrl-C.

use dotenvy::dotenv;
use futures_filter::config::{get_environment, Config};
use futures_filter::core::runtime::{RuntimeConfig, SymbolLoop};
use futures_filter::logging;
use futures_filter::services::{BinancePriceClient, TaapiClient};
use futures_filter::signals::{SignalEngine, StdoutNotifier};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    info!(
        environment = %get_environment(),
        exchange = %config.taapi.exchange,
        interval = %config.taapi.interval,
        symbols = config.symbols.len(),
        delay_secs = config.symbol_delay.as_secs(),
        timeout_secs = config.http_timeout.as_secs(),
        "Starting Futures Filter"
    );

    let indicators = Arc::new(TaapiClient::new(config.taapi.clone(), config.http_timeout)?);
    let prices = Arc::new(BinancePriceClient::new(
        config.binance_base_url.clone(),
        config.http_timeout,
    )?);
    let engine = Arc::new(SignalEngine::new(
        indicators,
        prices,
        Arc::new(StdoutNotifier),
    ));

    let scanner = SymbolLoop::new(RuntimeConfig::from(&config), engine);

    tokio::select! {
        _ = scanner.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutting down scanner...");
        }
    }

    Ok(())
}
