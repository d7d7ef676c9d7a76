//! Conversion: market chart wire pairs → HistoricalPoint.

use super::wire::MarketChartResponse;
use super::HistoricalPoint;
use rust_decimal::Decimal;

impl From<(f64, Decimal)> for HistoricalPoint {
    fn from((timestamp, price): (f64, Decimal)) -> Self {
        Self {
            timestamp: timestamp as i64,
            price,
        }
    }
}

impl MarketChartResponse {
    /// Points in upstream order; no dedup or gap filling.
    pub fn into_points(self) -> Vec<HistoricalPoint> {
        self.prices.into_iter().map(HistoricalPoint::from).collect()
    }
}
