use serde::{Deserialize, Serialize};

/// Indicator readings for one symbol from one bulk response.
///
/// Every field is optional: a missing reading is absence, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochrsi_fastk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochrsi_fastd: Option<f64>,
}

impl IndicatorSnapshot {
    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_ema_200(mut self, ema: f64) -> Self {
        self.ema_200 = Some(ema);
        self
    }

    pub fn with_stochrsi(mut self, fastk: f64, fastd: f64) -> Self {
        self.stochrsi_fastk = Some(fastk);
        self.stochrsi_fastd = Some(fastd);
        self
    }

    /// All four readings, or `None` if any is absent
    pub fn complete(&self) -> Option<CompleteIndicators> {
        Some(CompleteIndicators {
            rsi: self.rsi?,
            ema_200: self.ema_200?,
            stochrsi_fastk: self.stochrsi_fastk?,
            stochrsi_fastd: self.stochrsi_fastd?,
        })
    }
}

/// A snapshot with every reading present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompleteIndicators {
    pub rsi: f64,
    pub ema_200: f64,
    pub stochrsi_fastk: f64,
    pub stochrsi_fastd: f64,
}

/// Latest traded price for a symbol at fetch time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
}
