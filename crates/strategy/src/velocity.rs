use crate::leadership::{cut_price, leadership_at_risk};
use repricer_core::{Price, StrategyConfig};
use repricer_ports::DecisionRule;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Gap held under the competitor when already winning
const SHADOW_GAP: Decimal = dec!(0.10);

/// Velocity strategy: cut when leadership is at risk, otherwise shadow the
/// competitor from just underneath to keep sales flowing.
pub struct VelocityUndercut;

impl DecisionRule for VelocityUndercut {
    fn name(&self) -> &str {
        "VelocityUndercut"
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
            own_price.min(competitor_price - SHADOW_GAP)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuts_when_at_risk() {
        let config = StrategyConfig::velocity_surge(); // 2.5% + $0.50
        let rule = VelocityUndercut;

        let target = rule.propose(dec!(100), Some(dec!(100)), 0, &config);

        assert_eq!(target, dec!(97.0));
    }

    #[test]
    fn test_holds_when_safely_cheaper() {
        let config = StrategyConfig::velocity_surge();
        let rule = VelocityUndercut;

        // Own 95 vs competitor 100: already under the shadow gap, hold
        let target = rule.propose(dec!(95), Some(dec!(100)), 3, &config);

        assert_eq!(target, dec!(95));
    }

    #[test]
    fn test_holds_without_competitor_data() {
        let config = StrategyConfig::velocity_surge();
        let rule = VelocityUndercut;

        assert_eq!(rule.propose(dec!(95), None, 0, &config), dec!(95));
    }
}
