//! Per-symbol evaluation pipeline: indicators, price, deviation, rules.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::indicators::{deviation_metric, parse_bulk_response, EvaluationError};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::Opportunity;
use crate::models::strategy::{OpportunityRule, RuleInputs};
use crate::services::error::FetchError;
use crate::services::market_data::{IndicatorProvider, PriceProvider};
use crate::signals::notifier::Notifier;
use crate::signals::rules::{matching_rules_in, OPPORTUNITY_RULES};

/// What happened to one symbol in one pass
#[derive(Debug)]
pub enum SymbolOutcome {
    IndicatorFetchFailed(FetchError),
    /// The bulk response had no `data` list
    DataUnavailable,
    /// At least one of the four readings was missing
    IndicatorsUnavailable(IndicatorSnapshot),
    PriceUnavailable(FetchError),
    ArithmeticError(EvaluationError),
    Evaluated {
        deviation: f64,
        opportunities: Vec<Opportunity>,
    },
}

impl SymbolOutcome {
    pub fn opportunity_count(&self) -> usize {
        match self {
            SymbolOutcome::Evaluated { opportunities, .. } => opportunities.len(),
            _ => 0,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self, SymbolOutcome::Evaluated { .. })
    }
}

/// Anything that can run the full per-symbol pipeline
#[async_trait]
pub trait SymbolProcessor: Send + Sync {
    async fn process_symbol(&self, symbol: &str) -> SymbolOutcome;
}

pub struct SignalEngine {
    indicators: Arc<dyn IndicatorProvider>,
    prices: Arc<dyn PriceProvider>,
    notifier: Arc<dyn Notifier>,
    rules: &'static [OpportunityRule],
}

impl SignalEngine {
    pub fn new(
        indicators: Arc<dyn IndicatorProvider>,
        prices: Arc<dyn PriceProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            indicators,
            prices,
            notifier,
            rules: &OPPORTUNITY_RULES,
        }
    }

    /// Evaluate against `rules` instead of the built-in table.
    pub fn with_rules(mut self, rules: &'static [OpportunityRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Fetch indicators for `symbol` and evaluate them.
    pub async fn process(&self, symbol: &str) -> SymbolOutcome {
        match self.indicators.fetch_indicators(symbol).await {
            Ok(body) => self.evaluate_response(symbol, &body).await,
            Err(e) => SymbolOutcome::IndicatorFetchFailed(e),
        }
    }

    /// Evaluate a raw bulk response. The price is only fetched once all four
    /// readings are present.
    pub async fn evaluate_response(&self, symbol: &str, body: &Value) -> SymbolOutcome {
        let snapshot = match parse_bulk_response(body) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                warn!(symbol = %symbol, "{} data not obtainable", symbol);
                return SymbolOutcome::DataUnavailable;
            }
        };

        let Some(readings) = snapshot.complete() else {
            warn!(
                symbol = %symbol,
                snapshot = ?snapshot,
                "indicators/EMA not available for {}",
                symbol
            );
            return SymbolOutcome::IndicatorsUnavailable(snapshot);
        };

        let quote = match self.prices.get_latest_price(symbol).await {
            Ok(quote) => quote,
            Err(e) => return SymbolOutcome::PriceUnavailable(e),
        };

        let deviation = match deviation_metric(quote.price, readings.ema_200) {
            Ok(deviation) => deviation,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Skipping {}: {}", symbol, e);
                return SymbolOutcome::ArithmeticError(e);
            }
        };

        let inputs = RuleInputs {
            rsi: readings.rsi,
            stochrsi_fastk: readings.stochrsi_fastk,
            stochrsi_fastd: readings.stochrsi_fastd,
            deviation,
        };
        debug!(
            symbol = %symbol,
            price = quote.price,
            inputs = ?inputs,
            "Evaluating opportunity rules"
        );

        let timestamp = Utc::now();
        let opportunities: Vec<Opportunity> = matching_rules_in(self.rules, &inputs)
            .into_iter()
            .map(|rule| Opportunity {
                symbol: symbol.to_string(),
                rule_id: rule.id,
                bias: rule.bias,
                inputs,
                price: quote.price,
                timestamp,
            })
            .collect();

        for opportunity in &opportunities {
            self.notifier.notify(opportunity);
        }

        SymbolOutcome::Evaluated {
            deviation,
            opportunities,
        }
    }
}

#[async_trait]
impl SymbolProcessor for SignalEngine {
    async fn process_symbol(&self, symbol: &str) -> SymbolOutcome {
        self.process(symbol).await
    }
}
