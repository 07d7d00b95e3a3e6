use crate::{LiquidationStepDown, MarginHarvester, ProfitRecoup, VelocityUndercut};
use repricer_core::{PriceDirection, StrategyConfig, StrategyKind};
use repricer_ports::DecisionRule;

/// Select the decision rule for a configuration.
///
/// INCREASE runs always harvest; DECREASE runs dispatch on the strategy
/// family.
pub fn rule_for(config: &StrategyConfig) -> &'static dyn DecisionRule {
    match config.direction {
        PriceDirection::Increase => &MarginHarvester,
        PriceDirection::Decrease => match config.kind {
            StrategyKind::Velocity => &VelocityUndercut,
            StrategyKind::Liquidation => &LiquidationStepDown,
            StrategyKind::Profit => &ProfitRecoup,
        },
    }
}
