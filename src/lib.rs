//! Futures opportunity filter
//!
//! Polls TAAPI.io for RSI, EMA(200) and StochRSI on hourly futures candles,
//! pulls the Binance spot price, and reports symbols whose readings match one
//! of the fixed opportunity patterns.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
