use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Percentage value on a 0-100 scale unless noted otherwise
pub type Percent = Decimal;

/// Calendar date of a simulation step (steps are day-granular)
pub type StepDate = NaiveDate;

/// Cost-basis ratio used by the reference behavior when the caller has no
/// landed-cost data of its own.
pub const REFERENCE_COST_RATIO: Decimal = dec!(0.65);

/// Derive a cost basis as 65% of the start price.
pub fn reference_cost_basis(start_price: Price) -> Price {
    start_price * REFERENCE_COST_RATIO
}
