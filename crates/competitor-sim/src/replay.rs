use repricer_core::Price;
use repricer_ports::CompetitorModel;

/// Replays an observed competitor price series
///
/// The last value holds once the series is exhausted, so a short recording
/// can still drive a longer horizon.
pub struct ReplayCompetitor {
    prices: Vec<Price>,
}

impl ReplayCompetitor {
    pub fn new(prices: Vec<Price>) -> Self {
        Self { prices }
    }
}

impl CompetitorModel for ReplayCompetitor {
    fn name(&self) -> &str {
        "ReplayCompetitor"
    }

    fn next_price(&mut self, step_index: u32) -> Price {
        let idx = (step_index as usize).min(self.prices.len().saturating_sub(1));
        self.prices.get(idx).copied().unwrap_or(Price::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_replays_in_order_and_holds_last() {
        let mut model = ReplayCompetitor::new(vec![dec!(101), dec!(99.5), dec!(98)]);

        assert_eq!(model.next_price(0), dec!(101));
        assert_eq!(model.next_price(1), dec!(99.5));
        assert_eq!(model.next_price(2), dec!(98));
        assert_eq!(model.next_price(3), dec!(98));
        assert_eq!(model.next_price(40), dec!(98));
    }

    #[test]
    fn test_empty_series_reads_zero() {
        let mut model = ReplayCompetitor::new(Vec::new());

        assert_eq!(model.next_price(0), Price::ZERO);
    }
}
