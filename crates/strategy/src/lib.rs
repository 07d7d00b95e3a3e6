//! Repricer Strategy Rules
//!
//! One decision rule per strategy family, all behind the common
//! `DecisionRule` trait:
//!
//! - **VelocityUndercut**: chase price leadership, shadow the competitor
//! - **LiquidationStepDown**: step down until inventory clears, never re-raise
//! - **ProfitRecoup**: stay competitive, claw margin back when safely ahead
//! - **MarginHarvester**: competitor-blind increases for profit harvesting
//!
//! `rule_for` picks the rule for a configuration; the simulation stepper
//! never branches on strategy families itself, so new families slot in
//! without touching the loop.

pub mod dispatch;
pub mod harvest;
pub mod leadership;
pub mod liquidation;
pub mod profit;
pub mod velocity;

// Re-export main types
pub use dispatch::rule_for;
pub use harvest::MarginHarvester;
pub use leadership::{LEADERSHIP_BAND, cut_price, leadership_at_risk};
pub use liquidation::LiquidationStepDown;
pub use profit::ProfitRecoup;
pub use velocity::VelocityUndercut;
