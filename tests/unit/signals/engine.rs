//! Unit tests for the signal engine pipeline

use async_trait::async_trait;
use futures_filter::models::{Bound, Opportunity, OpportunityRule, PriceQuote, TrendBias};
use futures_filter::services::{FetchError, IndicatorProvider, PriceProvider};
use futures_filter::signals::{Notifier, SignalEngine, SymbolOutcome};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_test::traced_test;

struct FixedIndicators {
    body: Option<Value>,
}

#[async_trait]
impl IndicatorProvider for FixedIndicators {
    async fn fetch_indicators(&self, _symbol: &str) -> Result<Value, FetchError> {
        self.body.clone().ok_or(FetchError::Status {
            status: 429,
            body: "Too Many Requests".to_string(),
        })
    }
}

struct FixedPrice {
    price: Option<f64>,
    calls: AtomicUsize,
}

impl FixedPrice {
    fn new(price: Option<f64>) -> Arc<Self> {
        Arc::new(Self {
            price,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceProvider for FixedPrice {
    async fn get_latest_price(&self, _symbol: &str) -> Result<PriceQuote, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.price
            .map(|price| PriceQuote { price })
            .ok_or(FetchError::MissingField("price"))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Opportunity>>,
}

impl RecordingNotifier {
    fn lines(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|o| o.to_string())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, opportunity: &Opportunity) {
        self.seen.lock().unwrap().push(opportunity.clone());
    }
}

fn bulk(rsi: Option<f64>, ema: Option<f64>, fastk: Option<f64>, fastd: Option<f64>) -> Value {
    json!({
        "data": [
            {"indicator": "rsi", "result": {"value": rsi}},
            {"indicator": "ema", "result": {"value": ema}},
            {"indicator": "stochrsi", "result": {"valueFastK": fastk, "valueFastD": fastd}}
        ]
    })
}

/// Price whose deviation from `ema` equals `deviation` percent.
fn price_for(ema: f64, deviation: f64) -> f64 {
    let d = deviation / 100.0;
    ema * (2.0 + d) / (2.0 - d)
}

fn engine(
    body: Option<Value>,
    price: Arc<FixedPrice>,
) -> (SignalEngine, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = SignalEngine::new(
        Arc::new(FixedIndicators { body }),
        price,
        notifier.clone(),
    );
    (engine, notifier)
}

#[tokio::test]
async fn test_rule_1_emits_one_notification() {
    let price = FixedPrice::new(Some(price_for(1000.0, -0.1)));
    let (engine, notifier) = engine(
        Some(bulk(Some(50.0), Some(1000.0), Some(95.0), Some(85.0))),
        price.clone(),
    );

    let outcome = engine.process("BTC").await;

    match outcome {
        SymbolOutcome::Evaluated {
            deviation,
            opportunities,
        } => {
            assert!((deviation - (-0.1)).abs() < 1e-9);
            assert_eq!(opportunities.len(), 1);
            assert_eq!(opportunities[0].rule_id, 1);
            assert_eq!(opportunities[0].bias, TrendBias::Downtrend);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(notifier.lines(), vec!["Opportunity at: BTC"]);
    assert_eq!(price.calls(), 1);
}

#[tokio::test]
async fn test_rule_3_only_for_deep_discount() {
    let price = FixedPrice::new(Some(price_for(1000.0, -0.5)));
    let (engine, notifier) = engine(
        Some(bulk(Some(65.0), Some(1000.0), Some(95.0), Some(85.0))),
        price,
    );

    let outcome = engine.process("ETH").await;

    assert_eq!(outcome.opportunity_count(), 1);
    if let SymbolOutcome::Evaluated { opportunities, .. } = outcome {
        assert_eq!(opportunities[0].rule_id, 3);
    }
    assert_eq!(notifier.lines(), vec!["Opportunity at: ETH"]);
}

#[tokio::test]
async fn test_no_match_still_evaluates() {
    let price = FixedPrice::new(Some(100.0));
    let (engine, notifier) = engine(
        Some(bulk(Some(50.0), Some(120.0), Some(50.0), Some(50.0))),
        price,
    );

    let outcome = engine.process("XRP").await;

    match outcome {
        SymbolOutcome::Evaluated {
            deviation,
            opportunities,
        } => {
            assert!((deviation - (-18.181818181818183)).abs() < 1e-9);
            assert!(opportunities.is_empty());
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(notifier.lines().is_empty());
}

#[tokio::test]
async fn test_any_missing_indicator_skips_price_fetch() {
    let cases = [
        bulk(None, Some(1000.0), Some(95.0), Some(85.0)),
        bulk(Some(50.0), None, Some(95.0), Some(85.0)),
        bulk(Some(50.0), Some(1000.0), None, Some(85.0)),
        bulk(Some(50.0), Some(1000.0), Some(95.0), None),
    ];

    for body in cases {
        let price = FixedPrice::new(Some(price_for(1000.0, -0.1)));
        let (engine, notifier) = engine(Some(body), price.clone());

        let outcome = engine.process("ADA").await;

        assert!(matches!(outcome, SymbolOutcome::IndicatorsUnavailable(_)));
        assert_eq!(price.calls(), 0);
        assert!(notifier.lines().is_empty());
    }
}

#[tokio::test]
async fn test_missing_data_key_is_skipped() {
    let price = FixedPrice::new(Some(1.0));
    let (engine, notifier) = engine(Some(json!({"message": "rate limited"})), price.clone());

    let outcome = engine.process("DOGE").await;

    assert!(matches!(outcome, SymbolOutcome::DataUnavailable));
    assert_eq!(price.calls(), 0);
    assert!(notifier.lines().is_empty());
}

#[tokio::test]
async fn test_indicator_fetch_failure_is_skipped() {
    let price = FixedPrice::new(Some(1.0));
    let (engine, notifier) = engine(None, price.clone());

    let outcome = engine.process("SOL").await;

    assert!(matches!(
        outcome,
        SymbolOutcome::IndicatorFetchFailed(FetchError::Status { status: 429, .. })
    ));
    assert_eq!(price.calls(), 0);
    assert!(notifier.lines().is_empty());
}

#[tokio::test]
async fn test_price_failure_produces_no_notification() {
    let price = FixedPrice::new(None);
    let (engine, notifier) = engine(
        Some(bulk(Some(50.0), Some(1000.0), Some(95.0), Some(85.0))),
        price.clone(),
    );

    let outcome = engine.process("BTC").await;

    assert!(matches!(outcome, SymbolOutcome::PriceUnavailable(_)));
    assert_eq!(price.calls(), 1);
    assert!(notifier.lines().is_empty());
}

#[tokio::test]
async fn test_zero_price_and_ema_is_skipped() {
    let price = FixedPrice::new(Some(0.0));
    let (engine, notifier) = engine(
        Some(bulk(Some(50.0), Some(0.0), Some(95.0), Some(85.0))),
        price,
    );

    let outcome = engine.process("BTC").await;

    assert!(matches!(outcome, SymbolOutcome::ArithmeticError(_)));
    assert!(notifier.lines().is_empty());
}

static OVERLAPPING_RULES: [OpportunityRule; 2] = [
    OpportunityRule {
        id: 1,
        bias: TrendBias::Downtrend,
        rsi: Bound::Above(40.0),
        stochrsi_fastk: Bound::Between(90.0, 100.0),
        stochrsi_fastd: Bound::Between(80.0, 100.0),
        deviation: Bound::Below(0.0),
    },
    OpportunityRule {
        id: 2,
        bias: TrendBias::Downtrend,
        rsi: Bound::Between(44.0, 54.0),
        stochrsi_fastk: Bound::Above(90.0),
        stochrsi_fastd: Bound::Above(80.0),
        deviation: Bound::Between(-0.19, 0.0),
    },
];

#[tokio::test]
async fn test_overlapping_rules_notify_once_each() {
    let price = FixedPrice::new(Some(price_for(1000.0, -0.1)));
    let (engine, notifier) = engine(
        Some(bulk(Some(50.0), Some(1000.0), Some(95.0), Some(85.0))),
        price,
    );
    let engine = engine.with_rules(&OVERLAPPING_RULES);

    let outcome = engine.process("BTC").await;

    let ids: Vec<u8> = match &outcome {
        SymbolOutcome::Evaluated { opportunities, .. } => {
            opportunities.iter().map(|o| o.rule_id).collect()
        }
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        notifier.lines(),
        vec!["Opportunity at: BTC", "Opportunity at: BTC"]
    );
}

#[tokio::test]
#[traced_test]
async fn test_missing_indicator_logged_once() {
    let price = FixedPrice::new(Some(1.0));
    let (engine, _notifier) = engine(
        Some(json!({"data": [{"indicator": "rsi", "result": {"value": 50.0}}]})),
        price,
    );

    engine.process("BTC").await;

    logs_assert(|lines: &[&str]| {
        match lines
            .iter()
            .filter(|line| line.contains("indicators/EMA not available for BTC"))
            .count()
        {
            1 => Ok(()),
            n => Err(format!("expected 1 not-available line, found {}", n)),
        }
    });
}

#[tokio::test]
#[traced_test]
async fn test_missing_data_key_logged() {
    let price = FixedPrice::new(Some(1.0));
    let (engine, _notifier) = engine(Some(json!({"message": "rate limited"})), price);

    engine.process("DOGE").await;

    assert!(logs_contain("DOGE data not obtainable"));
    assert!(!logs_contain("indicators/EMA not available for DOGE"));
}
