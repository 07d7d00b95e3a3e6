use log::debug;
use repricer_core::{GlobalGuardrails, Price, PriceDirection, StrategyConfig};
use repricer_ports::{EngineError, EngineResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Merge per-strategy limits with account-wide guardrails into the
/// effective bound for one run: a floor for DECREASE, a ceiling for
/// INCREASE.
///
/// For DECREASE the margin floor always wins when it is higher - a
/// strategy can never legally quote below the account-wide minimum margin,
/// however aggressive its own limit. Invalid guardrail numerics are an
/// error, never silently clamped.
pub fn resolve_limit(
    start_price: Price,
    cost_basis: Price,
    config: &StrategyConfig,
    guardrails: &GlobalGuardrails,
) -> EngineResult<Price> {
    if guardrails.min_profit_margin_pct < Decimal::ZERO {
        return Err(EngineError::Configuration(format!(
            "min_profit_margin_pct must be >= 0, got {}",
            guardrails.min_profit_margin_pct
        )));
    }
    if guardrails.hard_ceiling_multiple < Decimal::ZERO {
        return Err(EngineError::Configuration(format!(
            "hard_ceiling_multiple must be >= 0, got {}",
            guardrails.hard_ceiling_multiple
        )));
    }

    let strategy_excursion = start_price * config.percent_limit / dec!(100) + config.fixed_limit;

    let limit = match config.direction {
        PriceDirection::Decrease => {
            let strategy_floor = start_price - strategy_excursion;
            let margin_floor =
                cost_basis * (Decimal::ONE + guardrails.min_profit_margin_pct / dec!(100));

            let limit = strategy_floor.max(margin_floor);
            debug!(
                "[{}] floor resolved: strategy={} margin={} -> {}",
                config.id, strategy_floor, margin_floor, limit
            );
            limit
        }
        PriceDirection::Increase => {
            let strategy_ceiling = start_price + strategy_excursion;
            let hard_ceiling = start_price * guardrails.hard_ceiling_multiple;

            let limit = strategy_ceiling.min(hard_ceiling);
            debug!(
                "[{}] ceiling resolved: strategy={} hard={} -> {}",
                config.id, strategy_ceiling, hard_ceiling, limit
            );
            limit
        }
    };

    Ok(limit)
}
