//! Repricer Core Domain
//!
//! Pure domain types for the repricing simulation engine.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    GlobalGuardrails,
    KpiSummary,
    PriceDirection,
    SimulationPoint,
    SimulationResult,
    StrategyConfig,
    StrategyKind,
};
pub use values::{Percent, Price, StepDate, reference_cost_basis};
