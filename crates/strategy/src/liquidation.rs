use crate::leadership::{cut_price, leadership_at_risk};
use repricer_core::{Price, StrategyConfig};
use repricer_ports::DecisionRule;

/// Liquidation strategy: cut whenever leadership is at risk, hold when
/// already winning. Never re-raises.
pub struct LiquidationStepDown;

impl DecisionRule for LiquidationStepDown {
    fn name(&self) -> &str {
        "LiquidationStepDown"
    }

    fn propose(
        &self,
        own_price: Price,
        competitor: Option<Price>,
        _step_index: u32,
        config: &StrategyConfig,
    ) -> Price {
        let Some(competitor_price) = competitor else {
            return own_price;
        };

        if leadership_at_risk(own_price, competitor_price) {
            cut_price(own_price, config)
        } else {
            own_price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cuts_when_at_risk() {
        let config = StrategyConfig::liquidation_protocol(); // 5%
        let rule = LiquidationStepDown;

        let target = rule.propose(dec!(100), Some(dec!(99)), 0, &config);

        assert_eq!(target, dec!(95.00));
    }

    #[test]
    fn test_holds_when_winning() {
        let config = StrategyConfig::liquidation_protocol();
        let rule = LiquidationStepDown;

        let target = rule.propose(dec!(90), Some(dec!(100)), 5, &config);

        assert_eq!(target, dec!(90));
    }
}
