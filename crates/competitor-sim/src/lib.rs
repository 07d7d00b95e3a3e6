//! Competitor Simulator
//!
//! Generates the exogenous competitor price series for a simulation run:
//! a sinusoidal trend plus uniform jitter around a base price. This is
//! intentionally a toy stochastic generator, not a calibrated market
//! model. Anything implementing `CompetitorModel` (e.g. a replay of
//! observed prices) can stand in for it without touching the stepper.

mod replay;
mod sinusoidal;

pub use replay::ReplayCompetitor;
pub use sinusoidal::{CompetitorConfig, SinusoidalCompetitor};
