use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::strategy::{RuleInputs, TrendBias};

/// A matched rule for a symbol. Displays as the operator-facing alert line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub symbol: String,
    pub rule_id: u8,
    pub bias: TrendBias,
    pub inputs: RuleInputs,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opportunity at: {}", self.symbol)
    }
}
