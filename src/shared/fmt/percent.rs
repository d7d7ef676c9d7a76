//! 24-hour change rendering: direction plus magnitude with two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Direction arrow shown next to a change value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// A signed percent change split into its display parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentChange {
    pub trend: Trend,
    /// Absolute value with exactly two decimals and a `%` suffix (`"2.35%"`).
    pub text: String,
}

/// Negative changes trend down; zero and positive trend up.
pub fn format_percent_change(value: Decimal) -> PercentChange {
    let trend = if value.is_sign_negative() && !value.is_zero() {
        Trend::Down
    } else {
        Trend::Up
    };

    let mut magnitude = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(2);

    PercentChange {
        trend,
        text: format!("{}%", magnitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_positive_change() {
        let change = format_percent_change(dec("2.345"));
        assert_eq!(change.trend, Trend::Up);
        assert_eq!(change.text, "2.35%");
    }

    #[test]
    fn test_negative_change_shows_magnitude() {
        let change = format_percent_change(dec("-0.5"));
        assert_eq!(change.trend, Trend::Down);
        assert_eq!(change.text, "0.50%");
    }

    #[test]
    fn test_zero_change_trends_up() {
        let change = format_percent_change(Decimal::ZERO);
        assert_eq!(change.trend, Trend::Up);
        assert_eq!(change.text, "0.00%");
    }
}
