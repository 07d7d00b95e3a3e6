use crate::values::Percent;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Account-wide safety constraints
///
/// Guardrails override any single strategy's own limits: a strategy can be
/// as aggressive as it likes, but never past these bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalGuardrails {
    /// Minimum profit margin retained on DECREASE runs, percent over cost basis
    pub min_profit_margin_pct: Percent,
    /// Cap on a single step's decrease, percent of the current price
    pub max_daily_drop_pct: Percent,
    /// On INCREASE runs the price may never exceed this multiple of the
    /// start price
    pub hard_ceiling_multiple: Decimal,
    /// Advisory: skip repricing against sellers with no track record.
    /// Threaded through for forward compatibility; does not yet alter the
    /// numeric path.
    pub ignore_new_sellers: bool,
    /// Advisory: follow the competitor all the way down to the resolved
    /// floor. Same forward-compatibility status as `ignore_new_sellers`.
    pub match_competitor_floor: bool,
}

impl Default for GlobalGuardrails {
    fn default() -> Self {
        Self {
            min_profit_margin_pct: dec!(15),
            max_daily_drop_pct: dec!(5),
            hard_ceiling_multiple: dec!(2.0),
            ignore_new_sellers: true,
            match_competitor_floor: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_guardrails() {
        let guardrails = GlobalGuardrails::default();
        assert_eq!(guardrails.min_profit_margin_pct, dec!(15));
        assert_eq!(guardrails.max_daily_drop_pct, dec!(5));
        assert_eq!(guardrails.hard_ceiling_multiple, dec!(2.0));
    }
}
