//! KPI Aggregation
//!
//! Reduces a full trajectory to the summary KPIs shown next to the chart.
//! Works on the recorded (rounded) points so the summary always agrees
//! with what a consumer of the trajectory sees.

use repricer_core::{KpiSummary, Percent, Price, SimulationPoint};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Win-probability policy table: a buy-box style winner-take-most mapping
// from the relative price gap. Tunable policy values, not domain law.
const CLEAR_LEAD_DIFF: Decimal = dec!(0.03);
const CLEAR_LEAD_SCORE: Decimal = dec!(95);
const NARROW_LEAD_BASE: Decimal = dec!(60);
const NARROW_LEAD_SLOPE: Decimal = dec!(1000);
const NEAR_PARITY_DIFF: Decimal = dec!(-0.02);
const NEAR_PARITY_SCORE: Decimal = dec!(20);

/// Reduces a trajectory to its `KpiSummary`
///
/// Carries the run's start price and cost basis because the trajectory
/// itself does not.
pub struct KpiAggregator {
    start_price: Price,
    cost_basis: Price,
}

impl KpiAggregator {
    pub fn new(start_price: Price, cost_basis: Price) -> Self {
        Self {
            start_price,
            cost_basis,
        }
    }

    /// Win probability for one step's relative price gap,
    /// `diff = (competitor - own) / competitor`
    fn win_score(diff: Decimal) -> Percent {
        if diff > CLEAR_LEAD_DIFF {
            CLEAR_LEAD_SCORE
        } else if diff > Decimal::ZERO {
            NARROW_LEAD_BASE + diff * NARROW_LEAD_SLOPE
        } else if diff > NEAR_PARITY_DIFF {
            NEAR_PARITY_SCORE
        } else {
            Decimal::ZERO
        }
    }

    /// Margin of one recorded price over the cost basis, percent of price
    fn margin_pct(&self, own_price: Price) -> Percent {
        if own_price.is_zero() {
            // Reachable only with a zero cost basis; the margin is flat
            return Decimal::ZERO;
        }
        (own_price - self.cost_basis) / own_price * dec!(100)
    }

    pub fn summarize(&self, trajectory: &[SimulationPoint]) -> KpiSummary {
        let final_price = trajectory
            .last()
            .map(|p| p.own_price)
            .unwrap_or(self.start_price);

        let net_change_pct = (final_price - self.start_price) / self.start_price * dec!(100);

        let avg_margin = if trajectory.is_empty() {
            Decimal::ZERO
        } else {
            let total: Decimal = trajectory
                .iter()
                .map(|p| self.margin_pct(p.own_price))
                .sum();
            total / Decimal::from(trajectory.len() as u64)
        };

        // Steps without a competitor price (INCREASE runs) are not scored
        let scores: Vec<Percent> = trajectory
            .iter()
            .filter_map(|p| p.competitor_price.map(|c| (p.own_price, c)))
            .map(|(own, competitor)| {
                if competitor <= Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    Self::win_score((competitor - own) / competitor)
                }
            })
            .collect();
        let win_rate = if scores.is_empty() {
            Decimal::ZERO
        } else {
            let mean =
                scores.iter().copied().sum::<Decimal>() / Decimal::from(scores.len() as u64);
            mean.clamp(Decimal::ZERO, dec!(100))
        };

        KpiSummary {
            win_rate,
            avg_margin,
            net_change_pct,
            final_price,
        }
    }
}
