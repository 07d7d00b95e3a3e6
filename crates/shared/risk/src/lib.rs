//! Repricer Risk
//!
//! Guardrail resolution: merges a strategy's own limits with the
//! account-wide safety constraints into a single effective price bound for
//! a simulation run.

mod resolver;

pub use resolver::resolve_limit;
