use crate::leadership::{cut_price, leadership_at_risk};
use repricer_core::{Price, StrategyConfig};
use repricer_ports::DecisionRule;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Upward nudge applied once safely in the lead
const RECOUP_FACTOR: Decimal = dec!(1.01);

/// Profit strategy: cut when leadership is at risk; once safely cheaper,
/// recoup margin with a 1% nudge back up while staying competitive.
pub struct ProfitRecoup;

impl DecisionRule for ProfitRecoup {
    fn name(&self) -> &str {
        "ProfitRecoup"
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
            own_price * RECOUP_FACTOR
        }
    }
}
