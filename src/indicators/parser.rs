//! Bulk indicator response parsing

use serde_json::Value;

use crate::indicators::error::EvaluationError;
use crate::models::indicators::IndicatorSnapshot;

/// Collect RSI, EMA and StochRSI readings from a bulk response.
///
/// Entries with an unknown `indicator` name are skipped. A reading that is
/// missing or not numeric stays `None`. Fails only when `data` is absent.
pub fn parse_bulk_response(body: &Value) -> Result<IndicatorSnapshot, EvaluationError> {
    let entries = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or(EvaluationError::DataUnavailable)?;

    let mut snapshot = IndicatorSnapshot::default();
    for entry in entries {
        let result = entry.get("result");
        let field = |name: &str| result.and_then(|r| r.get(name)).and_then(Value::as_f64);

        match entry.get("indicator").and_then(Value::as_str) {
            Some("rsi") => snapshot.rsi = field("value"),
            Some("ema") => snapshot.ema_200 = field("value"),
            Some("stochrsi") => {
                snapshot.stochrsi_fastk = field("valueFastK");
                snapshot.stochrsi_fastd = field("valueFastD");
            }
            _ => {}
        }
    }

    Ok(snapshot)
}
