//! Opportunity detection.

pub mod engine;
pub mod notifier;
pub mod rules;

pub use engine::{SignalEngine, SymbolOutcome, SymbolProcessor};
pub use notifier::{Notifier, StdoutNotifier};
pub use rules::{matching_rules, matching_rules_in, OPPORTUNITY_RULES};
