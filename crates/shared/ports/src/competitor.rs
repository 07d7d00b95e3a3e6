use repricer_core::Price;

/// Exogenous competitor price source
///
/// The stepper only sees this trait, so the sinusoidal toy model can be
/// swapped for a replay of observed prices without touching the loop.
/// Implementations own their randomness and take an explicit seed so runs
/// are reproducible.
pub trait CompetitorModel: Send {
    /// Model name for logging
    fn name(&self) -> &str;

    /// Competitor price at the given step (>= 0)
    fn next_price(&mut self, step_index: u32) -> Price;
}
