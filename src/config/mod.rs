//! Runtime configuration loaded from the environment
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary before [`Config::from_env`] is called.

pub mod symbols;

use std::env;
use std::time::Duration;
use thiserror::Error;

pub use symbols::DEFAULT_SYMBOLS;

pub const DEFAULT_TAAPI_BASE_URL: &str = "https://api.taapi.io";
pub const DEFAULT_BINANCE_BASE_URL: &str = "https://api.binance.com";
pub const DEFAULT_EXCHANGE: &str = "binancefutures";
pub const DEFAULT_INTERVAL: &str = "1h";
pub const QUOTE_ASSET: &str = "USDT";

/// Pause between symbols; keeps the free TAAPI tier under its request quota.
pub const DEFAULT_SYMBOL_DELAY_SECONDS: u64 = 15;
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings for the indicator service
#[derive(Debug, Clone)]
pub struct TaapiConfig {
    pub secret: String,
    pub base_url: String,
    pub exchange: String,
    pub interval: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub taapi: TaapiConfig,
    pub binance_base_url: String,
    pub symbol_delay: Duration,
    pub http_timeout: Duration,
    pub symbols: Vec<String>,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("TAAPI_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("TAAPI_SECRET"))?;

        let taapi = TaapiConfig {
            secret,
            base_url: lookup("TAAPI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TAAPI_BASE_URL.to_string()),
            exchange: lookup("TAAPI_EXCHANGE").unwrap_or_else(|| DEFAULT_EXCHANGE.to_string()),
            interval: lookup("TAAPI_INTERVAL").unwrap_or_else(|| DEFAULT_INTERVAL.to_string()),
        };

        let symbol_delay = parse_seconds(
            "SYMBOL_DELAY_SECONDS",
            lookup("SYMBOL_DELAY_SECONDS"),
            DEFAULT_SYMBOL_DELAY_SECONDS,
        )?;
        let http_timeout = parse_seconds(
            "HTTP_TIMEOUT_SECONDS",
            lookup("HTTP_TIMEOUT_SECONDS"),
            DEFAULT_HTTP_TIMEOUT_SECONDS,
        )?;
        if http_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                name: "HTTP_TIMEOUT_SECONDS",
                value: "0".to_string(),
            });
        }

        let symbols = match lookup("SCAN_SYMBOLS") {
            Some(raw) => {
                let parsed = parse_symbols(&raw);
                if parsed.is_empty() {
                    return Err(ConfigError::Invalid {
                        name: "SCAN_SYMBOLS",
                        value: raw,
                    });
                }
                parsed
            }
            None => default_symbols(),
        };

        Ok(Self {
            taapi,
            binance_base_url: lookup("BINANCE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BINANCE_BASE_URL.to_string()),
            symbol_delay,
            http_timeout,
            symbols,
        })
    }
}

/// The built-in symbol list as owned strings
pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Split a comma separated symbol list, upper-casing and dropping blanks.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_seconds(
    name: &'static str,
    raw: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(Duration::from_secs(default)),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Deployment environment, used to pick the log format
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}
