//! Shared leadership test and cut-branch arithmetic for DECREASE rules

use repricer_core::{Price, StrategyConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tolerance band for the leadership test. Prices within 1% of the
/// competitor count as at-risk, so rounding noise near parity cannot flip
/// the decision branch between steps.
pub const LEADERSHIP_BAND: Decimal = dec!(0.99);

/// Seller is at risk of losing price leadership
pub fn leadership_at_risk(own_price: Price, competitor_price: Price) -> bool {
    own_price >= competitor_price * LEADERSHIP_BAND
}

/// Lever-driven price cut: the percent lever applies to the current price,
/// then the fixed lever comes off on top
pub fn cut_price(own_price: Price, config: &StrategyConfig) -> Price {
    own_price * (Decimal::ONE - config.percent_change / dec!(100)) - config.fixed_change
}
