/// Convert decimal odds to American odds.
/// Decimal odds >= 2.0 are underdog prices (positive American),
/// decimal odds between 1.0 and 2.0 are favorite prices (negative American).
pub fn decimal_to_american(decimal: f64) -> i32 {
    if decimal >= 2.0 {
        ((decimal - 1.0) * 100.0).round() as i32
    } else {
        (-100.0 / (decimal - 1.0)).round() as i32
    }
}

/// Convert American odds to decimal odds.
/// Positive odds (+150) mean you win $150 on a $100 bet.
/// Negative odds (-150) mean you need to bet $150 to win $100.
pub fn american_to_decimal(odds: i32) -> f64 {
    if odds > 0 {
        1.0 + odds as f64 / 100.0
    } else {
        1.0 + 100.0 / odds.abs() as f64
    }
}

/// Implied probability of a decimal price.
/// Only meaningful for odds > 1.0; callers validate before converting.
pub fn implied_probability(decimal: f64) -> f64 {
    1.0 / decimal
}
