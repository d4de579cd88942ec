//! Sequential symbol loop driving the signal engine

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{default_symbols, Config, DEFAULT_SYMBOL_DELAY_SECONDS};
use crate::signals::engine::{SymbolOutcome, SymbolProcessor};

/// Configuration for the symbol loop
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub symbols: Vec<String>,
    /// Pause after each symbol, including the last one of a pass
    pub symbol_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            symbol_delay: Duration::from_secs(DEFAULT_SYMBOL_DELAY_SECONDS),
        }
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            symbols: config.symbols.clone(),
            symbol_delay: config.symbol_delay,
        }
    }
}

/// Counts for one pass over the symbol list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub processed: usize,
    pub evaluated: usize,
    pub skipped: usize,
    pub opportunities: usize,
}

impl PassSummary {
    fn record(&mut self, outcome: &SymbolOutcome) {
        self.processed += 1;
        if outcome.is_evaluated() {
            self.evaluated += 1;
        } else {
            self.skipped += 1;
        }
        self.opportunities += outcome.opportunity_count();
    }
}

pub struct SymbolLoop {
    config: RuntimeConfig,
    processor: Arc<dyn SymbolProcessor>,
}

impl SymbolLoop {
    pub fn new(config: RuntimeConfig, processor: Arc<dyn SymbolProcessor>) -> Self {
        Self { config, processor }
    }

    /// Process every symbol once, in list order, pausing after each.
    pub async fn run_pass(&self) -> PassSummary {
        let mut summary = PassSummary::default();

        for symbol in &self.config.symbols {
            let outcome = self.processor.process_symbol(symbol).await;
            debug!(symbol = %symbol, outcome = ?outcome, "Symbol processed");
            summary.record(&outcome);
            tokio::time::sleep(self.config.symbol_delay).await;
        }

        summary
    }

    /// Run passes back to back. Stops after `max_passes` when given, otherwise
    /// never returns.
    pub async fn run_passes(&self, max_passes: Option<u64>) -> u64 {
        let mut passes = 0u64;

        loop {
            let summary = self.run_pass().await;
            passes += 1;
            info!(
                pass = passes,
                processed = summary.processed,
                evaluated = summary.evaluated,
                skipped = summary.skipped,
                opportunities = summary.opportunities,
                "All tokens tested. Restarting."
            );

            if max_passes.is_some_and(|max| passes >= max) {
                return passes;
            }
        }
    }

    /// Scan forever
    pub async fn run(&self) {
        info!(
            symbols = self.config.symbols.len(),
            delay_secs = self.config.symbol_delay.as_secs(),
            "Starting symbol loop"
        );
        self.run_passes(None).await;
    }
}
