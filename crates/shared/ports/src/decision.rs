use repricer_core::{Price, StrategyConfig};

/// Per-strategy pricing decision, applied before guardrails
///
/// One implementation per strategy family. The stepper dispatches on the
/// configured kind and direction and stays unchanged when new families are
/// added.
pub trait DecisionRule: Send + Sync {
    /// Rule name for logging
    fn name(&self) -> &str;

    /// Propose the next own price, before any guardrail clamping.
    ///
    /// `competitor` is None when the run does not track competition; rules
    /// that need competitor data hold price in that case.
    fn propose(
        &self,
        own_price: Price,
        competitor: Option<Price>,
        step_index: u32,
        config: &StrategyConfig,
    ) -> Price;
}
