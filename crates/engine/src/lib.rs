//! Repricer Engine
//!
//! Orchestrates one repricing simulation run:
//!
//! - **Stepper**: the time loop; decision rule, then guardrail clamp, then
//!   record
//! - **KPI Aggregator**: reduces the trajectory to summary statistics
//! - **simulate**: the one-call entry point
//!
//! ## Architecture
//!
//! ```text
//!  StrategyConfig + GlobalGuardrails + horizon + seed
//!                      │
//!                      ▼
//!            ┌──────────────────┐  per step  ┌──────────────────┐
//!            │     Stepper      │◄───────────│ CompetitorModel  │
//!            │                  │            └──────────────────┘
//!            │  propose ────────│────────────► DecisionRule
//!            │  clamp ──────────│────────────► resolve_limit
//!            └────────┬─────────┘
//!                     │ trajectory
//!                     ▼
//!            ┌──────────────────┐
//!            │  KpiAggregator   │
//!            └────────┬─────────┘
//!                     ▼
//!         SimulationResult { trajectory, kpis }
//! ```
//!
//! A run is a pure function of its parameters plus the supplied seed: no
//! ambient state, no I/O, and independent runs can execute concurrently
//! without coordination.

pub mod kpi;
pub mod stepper;

// Re-export main types
pub use kpi::KpiAggregator;
pub use stepper::{PriceSimulation, SimulationParams, simulate};

// Re-export the domain types callers need to drive a run
pub use repricer_core::{
    GlobalGuardrails, KpiSummary, PriceDirection, SimulationPoint, SimulationResult,
    StrategyConfig, StrategyKind, reference_cost_basis,
};
pub use repricer_ports::{CompetitorModel, EngineError, EngineResult};
