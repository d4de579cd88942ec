//! Shared data models spanning the scanner layers.

pub mod indicators;
pub mod signal;
pub mod strategy;

pub use indicators::{CompleteIndicators, IndicatorSnapshot, PriceQuote};
pub use signal::Opportunity;
pub use strategy::{Bound, OpportunityRule, RuleInputs, TrendBias};
