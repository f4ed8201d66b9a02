use rust_decimal::{Decimal, RoundingStrategy};

/// Display form of a quantity: at most one fractional digit, no trailing
/// zeros, at least one integer digit (`0.5`, `2`, `1.3`).
pub fn format_quantity(quantity: Decimal) -> String {
    quantity
        .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
        .normalize()
        .to_string()
}
