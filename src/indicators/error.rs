use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EvaluationError {
    #[error("response has no indicator data")]
    DataUnavailable,
    #[error("deviation undefined for price {price} and EMA {ema_200}")]
    Arithmetic { price: f64, ema_200: f64 },
}
