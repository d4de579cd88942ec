//! Fixed opportunity rule table

use crate::models::strategy::{Bound, OpportunityRule, RuleInputs, TrendBias};

const OVERBOUGHT_K: Bound = Bound::Between(90.0, 100.0);
const OVERBOUGHT_D: Bound = Bound::Between(80.0, 100.0);
const OVERSOLD_K: Bound = Bound::Between(0.0, 10.0);
const OVERSOLD_D: Bound = Bound::Between(0.0, 20.0);

/// Every rule is checked on every evaluation; overlapping matches are kept.
pub static OPPORTUNITY_RULES: [OpportunityRule; 8] = [
    OpportunityRule {
        id: 1,
        bias: TrendBias::Downtrend,
        rsi: Bound::Between(44.0, 54.0),
        stochrsi_fastk: OVERBOUGHT_K,
        stochrsi_fastd: OVERBOUGHT_D,
        deviation: Bound::Between(-0.19, 0.0),
    },
    OpportunityRule {
        id: 2,
        bias: TrendBias::Downtrend,
        rsi: Bound::Above(60.0),
        stochrsi_fastk: OVERBOUGHT_K,
        stochrsi_fastd: OVERBOUGHT_D,
        deviation: Bound::Between(-0.19, 0.0),
    },
    OpportunityRule {
        id: 3,
        bias: TrendBias::Downtrend,
        rsi: Bound::Above(60.0),
        stochrsi_fastk: OVERBOUGHT_K,
        stochrsi_fastd: OVERBOUGHT_D,
        deviation: Bound::Below(-0.35),
    },
    OpportunityRule {
        id: 4,
        bias: TrendBias::Downtrend,
        rsi: Bound::Above(60.0),
        stochrsi_fastk: OVERBOUGHT_K,
        stochrsi_fastd: OVERBOUGHT_D,
        deviation: Bound::Between(0.3, 1.0),
    },
    OpportunityRule {
        id: 5,
        bias: TrendBias::Uptrend,
        rsi: Bound::Between(46.0, 56.0),
        stochrsi_fastk: OVERSOLD_K,
        stochrsi_fastd: OVERSOLD_D,
        deviation: Bound::Between(0.0, 0.19),
    },
    OpportunityRule {
        id: 6,
        bias: TrendBias::Uptrend,
        rsi: Bound::Below(40.0),
        stochrsi_fastk: OVERSOLD_K,
        stochrsi_fastd: OVERSOLD_D,
        deviation: Bound::Above(0.35),
    },
    OpportunityRule {
        id: 7,
        bias: TrendBias::Uptrend,
        rsi: Bound::Below(40.0),
        stochrsi_fastk: OVERSOLD_K,
        stochrsi_fastd: OVERSOLD_D,
        deviation: Bound::Between(0.0, 0.19),
    },
    OpportunityRule {
        id: 8,
        bias: TrendBias::Uptrend,
        rsi: Bound::Below(40.0),
        stochrsi_fastk: OVERSOLD_K,
        stochrsi_fastd: OVERSOLD_D,
        deviation: Bound::Between(-1.0, -0.3),
    },
];

/// Rules from [`OPPORTUNITY_RULES`] that hold for `inputs`, in table order
pub fn matching_rules(inputs: &RuleInputs) -> Vec<&'static OpportunityRule> {
    matching_rules_in(&OPPORTUNITY_RULES, inputs)
}

/// Rules from `rules` that hold for `inputs`, in table order. Overlapping
/// rules all match.
pub fn matching_rules_in<'a>(
    rules: &'a [OpportunityRule],
    inputs: &RuleInputs,
) -> Vec<&'a OpportunityRule> {
    rules.iter().filter(|rule| rule.matches(inputs)).collect()
}
