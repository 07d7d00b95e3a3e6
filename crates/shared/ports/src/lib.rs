//! Repricer Ports
//!
//! Port definitions (traits) for the repricing simulation engine.
//! These define the boundaries between the simulation stepper and its
//! pluggable pieces: the competitor process and the strategy decision
//! rules.

mod competitor;
mod decision;
mod error;

pub use competitor::CompetitorModel;
pub use decision::DecisionRule;
pub use error::{EngineError, EngineResult};
