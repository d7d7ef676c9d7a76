//! Wire types for `/coins/{id}/market_chart` (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market chart response. The API also sends `market_caps` and
/// `total_volumes`; only `prices` is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    /// `[timestamp_ms, price]` pairs, oldest first.
    pub prices: Vec<(f64, Decimal)>,
}
