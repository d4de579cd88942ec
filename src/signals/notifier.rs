//! Opportunity notification sinks

use tracing::info;

use crate::models::signal::Opportunity;

pub trait Notifier: Send + Sync {
    fn notify(&self, opportunity: &Opportunity);
}

/// Prints each opportunity line to stdout and mirrors it as a log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, opportunity: &Opportunity) {
        info!(
            symbol = %opportunity.symbol,
            rule = opportunity.rule_id,
            bias = ?opportunity.bias,
            rsi = opportunity.inputs.rsi,
            fastk = opportunity.inputs.stochrsi_fastk,
            fastd = opportunity.inputs.stochrsi_fastd,
            deviation = opportunity.inputs.deviation,
            price = opportunity.price,
            "Opportunity matched"
        );
        println!("{}", opportunity);
    }
}
