use rand::{Rng, SeedableRng, rngs::StdRng};
use repricer_core::Price;
use repricer_ports::CompetitorModel;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Offset of the competitor's base price above the seller's start price
const BASE_OFFSET: Decimal = dec!(1.5);

/// Configuration for the sinusoidal competitor model
#[derive(Debug, Clone)]
pub struct CompetitorConfig {
    /// Center of the competitor's price series
    pub base_price: Price,
    /// Peak of the sinusoidal trend, currency units
    pub trend_amplitude: Decimal,
    /// Trend period in steps
    pub trend_period: Decimal,
    /// Uniform jitter half-width, currency units
    pub noise_amplitude: Decimal,
}

impl CompetitorConfig {
    /// Reference construction: base the competitor just above the seller's
    /// start price, so the trend regularly dips below it.
    pub fn around(start_price: Price) -> Self {
        Self {
            base_price: start_price + BASE_OFFSET,
            trend_amplitude: dec!(3),
            trend_period: dec!(6),
            noise_amplitude: dec!(1),
        }
    }
}

/// Sinusoidal trend plus uniform jitter around a base price
pub struct SinusoidalCompetitor {
    config: CompetitorConfig,
    rng: StdRng,
}

impl SinusoidalCompetitor {
    /// Create the model. The seed is required: competitor noise must be
    /// reproducible across runs with identical inputs.
    pub fn new(config: CompetitorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CompetitorModel for SinusoidalCompetitor {
    fn name(&self) -> &str {
        "SinusoidalCompetitor"
    }

    fn next_price(&mut self, step_index: u32) -> Price {
        let period = self
            .config
            .trend_period
            .to_string()
            .parse::<f64>()
            .unwrap_or(6.0);
        let amplitude = self
            .config
            .trend_amplitude
            .to_string()
            .parse::<f64>()
            .unwrap_or(3.0);
        let noise_amp = self
            .config
            .noise_amplitude
            .to_string()
            .parse::<f64>()
            .unwrap_or(1.0);

        let trend = amplitude * (f64::from(step_index) / period).sin();
        let noise: f64 = if noise_amp > 0.0 {
            self.rng.gen_range(-noise_amp..noise_amp)
        } else {
            0.0
        };

        let offset = Decimal::from_f64_retain(trend + noise).unwrap_or(Decimal::ZERO);
        (self.config.base_price + offset).max(Decimal::ZERO)
    }
}
