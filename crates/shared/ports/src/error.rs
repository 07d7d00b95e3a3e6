use repricer_core::Price;
use thiserror::Error;

/// Errors surfaced by the simulation engine
///
/// A failed call is a caller bug (bad configuration), not a transient
/// fault: the engine is pure and deterministic given its seed, so there is
/// nothing to retry. Errors are returned to the caller, never swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Invalid numeric input. Raised before any step runs; no partial
    /// trajectory is produced.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Price went negative after clamping. Unreachable with a correct
    /// guardrail resolver, guarded rather than silently coerced to zero.
    #[error("Price went negative at step {step}: {price}")]
    NumericInstability { step: u32, price: Price },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
