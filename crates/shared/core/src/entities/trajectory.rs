use crate::values::{Percent, Price, StepDate};
use serde::{Deserialize, Serialize};

/// One recorded simulation step
///
/// Points are appended in step order (insertion order = chronological
/// order) and never mutated once recorded. Own and competitor prices are
/// rounded to cents at recording time; `limit_price` keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    /// Position in the trajectory, starting at 0
    pub step_index: u32,
    /// Calendar date of the step
    pub date: StepDate,
    /// Short display label, e.g. "Nov 14"
    pub label: String,
    /// Seller price after this step's decision
    pub own_price: Price,
    /// Competitor price observed this step.
    /// None for INCREASE runs, which ignore competition.
    pub competitor_price: Option<Price>,
    /// Effective bound active this step: a floor for DECREASE, a ceiling
    /// for INCREASE
    pub limit_price: Price,
}

/// Aggregate KPIs derived from one full trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Mean per-step win probability, 0-100
    pub win_rate: Percent,
    /// Mean margin over the trajectory, percent of price
    pub avg_margin: Percent,
    /// Net move of the final price relative to the start price, percent
    pub net_change_pct: Percent,
    /// Last recorded own price
    pub final_price: Price,
}

/// Output of one simulation run
///
/// The engine is the sole producer. The result lives for the duration of
/// one call; nothing is cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Ordered per-step trajectory
    pub trajectory: Vec<SimulationPoint>,
    /// Summary statistics over the trajectory
    pub kpis: KpiSummary,
}
