//! Opportunity rule data model

use serde::{Deserialize, Serialize};

/// Open range over a single reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// `low < v < high`
    Between(f64, f64),
    /// `v > low`
    Above(f64),
    /// `v < high`
    Below(f64),
}

impl Bound {
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Bound::Between(low, high) => low < value && value < high,
            Bound::Above(low) => value > low,
            Bound::Below(high) => value < high,
        }
    }
}

/// Market direction a rule was written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TrendBias {
    Downtrend,
    Uptrend,
}

/// One fixed predicate over `(rsi, %K, %D, deviation)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRule {
    pub id: u8,
    pub bias: TrendBias,
    pub rsi: Bound,
    pub stochrsi_fastk: Bound,
    pub stochrsi_fastd: Bound,
    pub deviation: Bound,
}

impl OpportunityRule {
    pub fn matches(&self, inputs: &RuleInputs) -> bool {
        self.rsi.contains(inputs.rsi)
            && self.stochrsi_fastk.contains(inputs.stochrsi_fastk)
            && self.stochrsi_fastd.contains(inputs.stochrsi_fastd)
            && self.deviation.contains(inputs.deviation)
    }
}

/// The four values every rule is tested against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleInputs {
    pub rsi: f64,
    pub stochrsi_fastk: f64,
    pub stochrsi_fastd: f64,
    pub deviation: f64,
}
