//! Price deviation from EMA(200)

use crate::indicators::error::EvaluationError;

/// Percentage difference between `price` and `ema_200`, relative to their mean:
///
/// `((price - ema_200) / ((price + ema_200) / 2)) * 100`
pub fn deviation_metric(price: f64, ema_200: f64) -> Result<f64, EvaluationError> {
    let mean = (price + ema_200) / 2.0;
    if mean == 0.0 {
        return Err(EvaluationError::Arithmetic { price, ema_200 });
    }

    let deviation = ((price - ema_200) / mean) * 100.0;
    if !deviation.is_finite() {
        return Err(EvaluationError::Arithmetic { price, ema_200 });
    }

    Ok(deviation)
}
