//! Logging initialization with environment-based formatters
//!
//! - Production: structured JSON lines for log shipping
//! - Anything else: colored, human-readable output for a terminal

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Whether the given environment name selects JSON output
pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. Diagnostics go to stderr so
/// stdout carries only opportunity lines.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&get_environment()) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
