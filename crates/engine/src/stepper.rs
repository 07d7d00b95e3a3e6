//! Simulation Stepper
//!
//! Owns the time loop: asks the competitor process for a price, the
//! decision rule for a proposal, clamps through the resolved guardrail
//! bound, and records each step. A run either completes every step or
//! fails before the first one; there is no partial trajectory and no
//! retry or resume.

use crate::kpi::KpiAggregator;
use chrono::Days;
use competitor_sim::{CompetitorConfig, SinusoidalCompetitor};
use log::{debug, info};
use repricer_core::{
    GlobalGuardrails, Price, PriceDirection, SimulationPoint, SimulationResult, StepDate,
    StrategyConfig,
};
use repricer_ports::{CompetitorModel, EngineError, EngineResult};
use repricer_risk::resolve_limit;
use repricer_strategy::rule_for;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Inputs of one simulation run
///
/// Everything the engine reads is in here: guardrails, the seed, and the
/// date anchor are explicit, so a run is a pure function of its
/// parameters.
#[derive(Debug, Clone)]
pub struct SimulationParams {
    /// Seller price at step zero
    pub start_price: Price,
    /// Landed cost per unit; only feeds margin math and the margin floor
    pub cost_basis: Price,
    /// Number of steps to project (> 0); one step per day
    pub horizon_steps: u32,
    /// The strategy under evaluation
    pub config: StrategyConfig,
    /// Account-wide safety constraints, fixed for the run
    pub guardrails: GlobalGuardrails,
    /// Seed for the competitor's randomness
    pub seed: u64,
    /// Anchor for step dates and labels
    pub start_date: StepDate,
}

impl SimulationParams {
    /// Parameters with the date anchor at the epoch
    pub fn new(
        start_price: Price,
        cost_basis: Price,
        horizon_steps: u32,
        config: StrategyConfig,
        guardrails: GlobalGuardrails,
        seed: u64,
    ) -> Self {
        Self {
            start_price,
            cost_basis,
            horizon_steps,
            config,
            guardrails,
            seed,
            start_date: StepDate::default(),
        }
    }

    /// Anchor the trajectory's dates at a concrete calendar date
    pub fn with_start_date(mut self, start_date: StepDate) -> Self {
        self.start_date = start_date;
        self
    }
}

/// One repricing simulation run
///
/// `run` consumes the simulation: it either completes all steps and
/// yields the result, or fails atomically before the first step.
pub struct PriceSimulation {
    params: SimulationParams,
}

impl PriceSimulation {
    pub fn new(params: SimulationParams) -> Self {
        Self { params }
    }

    /// Run against the default sinusoidal competitor
    pub fn run(self) -> EngineResult<SimulationResult> {
        let mut competitor = SinusoidalCompetitor::new(
            CompetitorConfig::around(self.params.start_price),
            self.params.seed,
        );
        self.run_with(&mut competitor)
    }

    /// Run against a caller-supplied competitor model
    pub fn run_with(self, competitor: &mut dyn CompetitorModel) -> EngineResult<SimulationResult> {
        let params = &self.params;
        Self::validate(params)?;

        // Guardrails are fixed per run, so the bound resolves once
        let limit = resolve_limit(
            params.start_price,
            params.cost_basis,
            &params.config,
            &params.guardrails,
        )?;
        let rule = rule_for(&params.config);

        info!(
            "[{}] run start: {} x{} steps, rule={}, competitor={}, limit={}",
            params.config.id,
            params.start_price,
            params.horizon_steps,
            rule.name(),
            competitor.name(),
            limit,
        );

        let mut trajectory = Vec::with_capacity(params.horizon_steps as usize);
        let mut own_price = params.start_price;

        for step in 0..params.horizon_steps {
            let competitor_price = match params.config.direction {
                PriceDirection::Decrease => Some(competitor.next_price(step)),
                // INCREASE runs ignore competition entirely
                PriceDirection::Increase => None,
            };

            let target = rule.propose(own_price, competitor_price, step, &params.config);

            let next = match params.config.direction {
                PriceDirection::Decrease => {
                    // Cap the single-step drop before the floor applies
                    let max_drop = own_price * params.guardrails.max_daily_drop_pct / dec!(100);
                    let actual_drop = (own_price - target).min(max_drop);
                    let candidate = own_price - actual_drop;
                    candidate.max(limit)
                }
                PriceDirection::Increase => target.min(limit),
            };

            if next < Decimal::ZERO {
                return Err(EngineError::NumericInstability { step, price: next });
            }

            debug!(
                "[{}] step {}: own={} competitor={:?} target={} -> {}",
                params.config.id, step, own_price, competitor_price, target, next
            );

            // Internal state keeps full precision; only the recorded
            // prices are rounded
            let date = params.start_date + Days::new(u64::from(step));
            trajectory.push(SimulationPoint {
                step_index: step,
                date,
                label: date.format("%b %-d").to_string(),
                own_price: next.round_dp(2),
                competitor_price: competitor_price.map(|p| p.round_dp(2)),
                limit_price: limit,
            });

            own_price = next;
        }

        let kpis =
            KpiAggregator::new(params.start_price, params.cost_basis).summarize(&trajectory);

        info!(
            "[{}] run complete: final={} win_rate={} avg_margin={}",
            params.config.id, kpis.final_price, kpis.win_rate, kpis.avg_margin
        );

        Ok(SimulationResult { trajectory, kpis })
    }

    fn validate(params: &SimulationParams) -> EngineResult<()> {
        if params.horizon_steps == 0 {
            return Err(EngineError::Configuration(
                "horizon_steps must be > 0".to_string(),
            ));
        }
        if params.start_price <= Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "start_price must be > 0, got {}",
                params.start_price
            )));
        }
        if params.cost_basis < Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "cost_basis must be >= 0, got {}",
                params.cost_basis
            )));
        }

        let config = &params.config;
        for (field, value) in [
            ("percent_change", config.percent_change),
            ("percent_limit", config.percent_limit),
            ("fixed_change", config.fixed_change),
            ("fixed_limit", config.fixed_limit),
        ] {
            if value < Decimal::ZERO {
                return Err(EngineError::Configuration(format!(
                    "{field} must be >= 0, got {value}"
                )));
            }
        }
        if config.period_days == 0 {
            return Err(EngineError::Configuration(
                "period_days must be > 0".to_string(),
            ));
        }

        if params.guardrails.max_daily_drop_pct < Decimal::ZERO {
            return Err(EngineError::Configuration(format!(
                "max_daily_drop_pct must be >= 0, got {}",
                params.guardrails.max_daily_drop_pct
            )));
        }

        Ok(())
    }
}

/// Project one strategy over a future horizon.
///
/// Pure given its inputs: identical parameters and seed produce an
/// identical result. Dates anchor at the epoch; build `SimulationParams`
/// directly to anchor elsewhere or to supply a different competitor
/// model.
pub fn simulate(
    start_price: Price,
    cost_basis: Price,
    horizon_steps: u32,
    config: &StrategyConfig,
    guardrails: &GlobalGuardrails,
    seed: u64,
) -> EngineResult<SimulationResult> {
    PriceSimulation::new(SimulationParams::new(
        start_price,
        cost_basis,
        horizon_steps,
        config.clone(),
        guardrails.clone(),
        seed,
    ))
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use competitor_sim::ReplayCompetitor;

    fn params_with(config: StrategyConfig, horizon: u32) -> SimulationParams {
        SimulationParams::new(
            dec!(100),
            dec!(65),
            horizon,
            config,
            GlobalGuardrails::default(),
            42,
        )
    }

    #[test]
    fn test_decrease_cut_then_hold() {
        // Flat competitor at 100: step 0 cuts 2.5% + $0.50, after which
        // the seller is safely cheaper and the velocity rule holds
        let params = params_with(StrategyConfig::velocity_surge(), 3);
        let mut competitor = ReplayCompetitor::new(vec![dec!(100); 3]);

        let result = PriceSimulation::new(params).run_with(&mut competitor).unwrap();

        let own: Vec<Price> = result.trajectory.iter().map(|p| p.own_price).collect();
        assert_eq!(own, vec![dec!(97.00), dec!(97.00), dec!(97.00)]);
        assert_eq!(result.kpis.final_price, dec!(97.00));
    }

    #[test]
    fn test_daily_drop_cap_binds() {
        // A 20% cut against a 5% daily cap drops only 5% per step. The
        // competitor tracks downward so leadership stays at risk on both
        // steps.
        let config = StrategyConfig {
            percent_change: dec!(20),
            fixed_change: dec!(0),
            percent_limit: dec!(50),
            fixed_limit: dec!(0),
            ..StrategyConfig::liquidation_protocol()
        };
        let params = SimulationParams::new(
            dec!(100),
            dec!(0),
            2,
            config,
            GlobalGuardrails {
                min_profit_margin_pct: dec!(0),
                ..Default::default()
            },
            42,
        );
        let mut competitor = ReplayCompetitor::new(vec![dec!(100), dec!(95.5)]);

        let result = PriceSimulation::new(params).run_with(&mut competitor).unwrap();

        // Step 0: target 80, capped at 100 * 5% -> 95
        // Step 1: still at risk vs 95.5; capped at 95 * 5% -> 90.25
        assert_eq!(result.trajectory[0].own_price, dec!(95.00));
        assert_eq!(result.trajectory[1].own_price, dec!(90.25));
    }

    #[test]
    fn test_increase_run_ignores_competition() {
        // $0.50 per step from 100 against a 110 ceiling (percent_limit 10)
        let params = params_with(StrategyConfig::profit_maximizer(), 30);

        let result = PriceSimulation::new(params).run().unwrap();

        assert!(result.trajectory.iter().all(|p| p.competitor_price.is_none()));
        assert_eq!(result.kpis.final_price, dec!(110.00));
        assert_eq!(result.trajectory[0].limit_price, dec!(110));
        assert_eq!(result.kpis.win_rate, dec!(0));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let params = params_with(StrategyConfig::velocity_surge(), 0);

        let err = PriceSimulation::new(params).run().unwrap_err();

        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_negative_lever_rejected() {
        let config = StrategyConfig {
            percent_change: dec!(-1),
            ..StrategyConfig::velocity_surge()
        };
        let params = params_with(config, 10);

        let err = PriceSimulation::new(params).run().unwrap_err();

        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_invalid_guardrails_fail_before_any_step() {
        let params = SimulationParams::new(
            dec!(100),
            dec!(65),
            10,
            StrategyConfig::velocity_surge(),
            GlobalGuardrails {
                min_profit_margin_pct: dec!(-5),
                ..Default::default()
            },
            42,
        );

        // The whole run fails; no partial trajectory escapes
        let err = PriceSimulation::new(params).run().unwrap_err();

        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_step_dates_advance_daily() {
        let start = StepDate::from_ymd_opt(2024, 11, 13).unwrap();
        let params = params_with(StrategyConfig::velocity_surge(), 3).with_start_date(start);
        let mut competitor = ReplayCompetitor::new(vec![dec!(100); 3]);

        let result = PriceSimulation::new(params).run_with(&mut competitor).unwrap();

        let labels: Vec<&str> = result.trajectory.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Nov 13", "Nov 14", "Nov 15"]);
        assert_eq!(result.trajectory[2].step_index, 2);
    }
}
