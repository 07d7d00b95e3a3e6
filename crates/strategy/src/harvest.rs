use repricer_core::{Price, StrategyConfig};
use repricer_ports::DecisionRule;
use rust_decimal_macros::dec;

/// INCREASE-direction rule: raise by the configured levers every step,
/// ignoring competition. Used by profit-harvesting strategies that are not
/// reacting to a competitor at all.
pub struct MarginHarvester;

impl DecisionRule for MarginHarvester {
    fn name(&self) -> &str {
        "MarginHarvester"
    }

    fn propose(
        &self,
        own_price: Price,
        _competitor: Option<Price>,
        _step_index: u32,
        config: &StrategyConfig,
    ) -> Price {
        own_price + own_price * config.percent_change / dec!(100) + config.fixed_change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raises_by_both_levers() {
        let config = StrategyConfig {
            percent_change: dec!(1),
            fixed_change: dec!(0.5),
            ..StrategyConfig::profit_maximizer()
        };
        let rule = MarginHarvester;

        let target = rule.propose(dec!(100), None, 0, &config);

        assert_eq!(target, dec!(101.5));
    }

    #[test]
    fn test_noop_levers_hold() {
        let config = StrategyConfig {
            percent_change: dec!(0),
            fixed_change: dec!(0),
            ..StrategyConfig::profit_maximizer()
        };
        let rule = MarginHarvester;

        assert_eq!(rule.propose(dec!(100), None, 7, &config), dec!(100));
    }
}
