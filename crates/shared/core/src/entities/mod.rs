mod guardrails;
mod strategy;
mod trajectory;

pub use guardrails::GlobalGuardrails;
pub use strategy::{PriceDirection, StrategyConfig, StrategyKind};
pub use trajectory::{KpiSummary, SimulationPoint, SimulationResult};
