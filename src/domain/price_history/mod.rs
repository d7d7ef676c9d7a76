//! Price history domain — a coin's price series over a lookback window, chart data.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::fmt::format_chart_date;
use crate::shared::{CoinId, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{CoinDetailState, DetailBody, HistoryRequest};

/// One sample of a coin's price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub price: Decimal,
}

/// The (coin, currency, window) combination a history belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryKey {
    pub coin_id: CoinId,
    pub currency: Currency,
    pub days: u32,
}

impl HistoryKey {
    pub fn new(coin_id: CoinId, currency: Currency, days: u32) -> Self {
        Self {
            coin_id,
            currency,
            days,
        }
    }
}

impl std::fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}d", self.coin_id, self.currency, self.days)
    }
}

// ─── Chart ───────────────────────────────────────────────────────────────────

/// Most x-axis labels drawn under the chart.
pub const MAX_X_TICKS: usize = 7;

/// Line-chart input derived from a history: one label and value per point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// `"Oct 19"` date label for every point (tooltip titles).
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
    /// Indices whose label is drawn on the x axis.
    pub ticks: Vec<usize>,
}

impl ChartSeries {
    pub fn from_points(points: &[HistoricalPoint]) -> Self {
        let labels = points
            .iter()
            .map(|p| format_chart_date(p.timestamp))
            .collect();
        let values = points.iter().map(|p| p.price).collect();

        let step = points.len().div_ceil(MAX_X_TICKS).max(1);
        let ticks = (0..points.len()).step_by(step).collect();

        Self {
            labels,
            values,
            ticks,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Axis label at `index`, or `None` where the axis stays blank.
    pub fn tick_label(&self, index: usize) -> Option<&str> {
        if self.ticks.contains(&index) {
            self.labels.get(index).map(String::as_str)
        } else {
            None
        }
    }

    /// Lowest and highest price, for the y-axis range.
    pub fn price_range(&self) -> Option<(Decimal, Decimal)> {
        let min = self.values.iter().min()?;
        let max = self.values.iter().max()?;
        Some((*min, *max))
    }
}
