use crate::values::{Percent, Price};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Strategy behavior family
///
/// Governs what the rule does when the seller already holds price
/// leadership; the shared cut branch applies whenever leadership is at risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyKind {
    /// Chase price leadership to keep sales velocity up
    Velocity,
    /// Clear inventory: keep cutting, never re-raise
    Liquidation,
    /// Defend margin: recoup price while still competitive
    Profit,
}

/// Direction a strategy is allowed to move the price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceDirection {
    Decrease,
    Increase,
}

/// A configured repricing rule
///
/// The percent and fixed levers are independent: either may be zero, and a
/// rule with both at zero moves nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Caller-supplied identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Behavior family
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    /// Inactive rules are kept in the catalog but not scheduled
    pub active: bool,
    /// Pricing action direction
    pub direction: PriceDirection,
    /// Per-step percentage move, percent of the current price (>= 0)
    pub percent_change: Percent,
    /// Total percentage excursion allowed from the start price (>= 0)
    pub percent_limit: Percent,
    /// Per-step fixed move in currency units (>= 0)
    pub fixed_change: Price,
    /// Total fixed excursion allowed from the start price (>= 0)
    pub fixed_limit: Price,
    /// Trigger: units sold per observation period (descriptive in current scope)
    pub sales_threshold: u32,
    /// Trigger: observation period in days (> 0)
    pub period_days: u32,
}

impl StrategyConfig {
    /// Both movement levers disabled
    pub fn has_noop_levers(&self) -> bool {
        self.percent_change.is_zero() && self.fixed_change.is_zero()
    }

    /// "Velocity Surge" - aggressively matches the Buy Box when sales
    /// velocity drops below 10 units/day.
    pub fn velocity_surge() -> Self {
        Self {
            id: "1".to_string(),
            name: "Velocity Surge".to_string(),
            kind: StrategyKind::Velocity,
            active: true,
            direction: PriceDirection::Decrease,
            percent_change: dec!(2.5),
            percent_limit: dec!(15),
            fixed_change: dec!(0.5),
            fixed_limit: dec!(5),
            sales_threshold: 10,
            period_days: 1,
        }
    }

    /// "Liquidation Protocol" - drops price 5% every 24h until inventory
    /// clears. Ships inactive.
    pub fn liquidation_protocol() -> Self {
        Self {
            id: "2".to_string(),
            name: "Liquidation Protocol".to_string(),
            kind: StrategyKind::Liquidation,
            active: false,
            direction: PriceDirection::Decrease,
            percent_change: dec!(5),
            percent_limit: dec!(30),
            fixed_change: dec!(0),
            fixed_limit: dec!(0),
            sales_threshold: 2,
            period_days: 1,
        }
    }

    /// "Profit Maximizer" - increments price by $0.50 while competition is
    /// weak.
    pub fn profit_maximizer() -> Self {
        Self {
            id: "3".to_string(),
            name: "Profit Maximizer".to_string(),
            kind: StrategyKind::Profit,
            active: true,
            direction: PriceDirection::Increase,
            percent_change: dec!(0),
            percent_limit: dec!(10),
            fixed_change: dec!(0.5),
            fixed_limit: dec!(0),
            sales_threshold: 5,
            period_days: 1,
        }
    }

    /// "Night Owl" - harvests margin overnight while competition is dormant.
    /// Ships inactive.
    pub fn night_owl() -> Self {
        Self {
            id: "4".to_string(),
            name: "Night Owl".to_string(),
            kind: StrategyKind::Profit,
            active: false,
            direction: PriceDirection::Increase,
            percent_change: dec!(1),
            percent_limit: dec!(15),
            fixed_change: dec!(0),
            fixed_limit: dec!(0),
            sales_threshold: 0,
            period_days: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_levers() {
        let mut config = StrategyConfig::liquidation_protocol();
        assert!(!config.has_noop_levers());

        config.percent_change = dec!(0);
        config.fixed_change = dec!(0);
        assert!(config.has_noop_levers());
    }

    #[test]
    fn test_kind_wire_format() {
        let config = StrategyConfig::velocity_surge();
        let json = serde_json::to_value(&config).unwrap();

        // Wire values match the original system
        assert_eq!(json["type"], "VELOCITY");
        assert_eq!(json["direction"], "DECREASE");
    }

    #[test]
    fn test_config_round_trip() {
        let config = StrategyConfig::profit_maximizer();
        let json = serde_json::to_string(&config).unwrap();
        let back: StrategyConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }
}
