//! Coin detail state container — app-owned, library-provided update logic.

use super::{ChartSeries, HistoricalPoint, HistoryKey};
use crate::domain::coin::Coin;
use crate::network::DEFAULT_HISTORY_DAYS;
use crate::shared::{Currency, FetchOutcome};

/// Inline message for a detail view with no history.
pub const NO_DATA_MESSAGE: &str = "No historical data available";

/// Tag for one in-flight history request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub seq: u64,
    pub key: HistoryKey,
}

/// What the chart area of the detail view should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailBody<'a> {
    Closed,
    Loading,
    /// The fetch failed or returned nothing. Not an error.
    NoData,
    Chart(&'a [HistoricalPoint]),
}

/// Open/closed state and price history of the selected coin.
#[derive(Debug, Clone)]
pub struct CoinDetailState {
    selected: Option<Coin>,
    open: bool,
    currency: Currency,
    days: u32,
    history: Vec<HistoricalPoint>,
    key: Option<HistoryKey>,
    loading: bool,
    seq: u64,
}

impl Default for CoinDetailState {
    fn default() -> Self {
        Self::new(Currency::default(), DEFAULT_HISTORY_DAYS)
    }
}

impl CoinDetailState {
    pub fn new(currency: Currency, days: u32) -> Self {
        Self {
            selected: None,
            open: false,
            currency,
            days,
            history: Vec::new(),
            key: None,
            loading: false,
            seq: 0,
        }
    }

    pub fn selected(&self) -> Option<&Coin> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// History for the current key; empty while loading or when closed.
    pub fn history(&self) -> &[HistoricalPoint] {
        &self.history
    }

    /// The (coin, currency, window) the stored history belongs to.
    pub fn key(&self) -> Option<&HistoryKey> {
        self.key.as_ref()
    }

    pub fn body(&self) -> DetailBody<'_> {
        if !self.open {
            DetailBody::Closed
        } else if self.loading {
            DetailBody::Loading
        } else if self.history.is_empty() {
            DetailBody::NoData
        } else {
            DetailBody::Chart(&self.history)
        }
    }

    pub fn chart(&self) -> ChartSeries {
        ChartSeries::from_points(&self.history)
    }

    /// Select `coin`, open the view and issue a history request for it.
    pub fn open(&mut self, coin: Coin) -> HistoryRequest {
        let key = HistoryKey::new(coin.id.clone(), self.currency, self.days);
        self.selected = Some(coin);
        self.open = true;
        self.issue(key)
    }

    /// Close the view and drop its history. The selected coin is kept.
    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
        self.history.clear();
        self.key = None;
        self.seq += 1;
    }

    /// Switch currency. If the view is open, its history is discarded and
    /// a request for the new currency is returned.
    pub fn set_currency(&mut self, currency: Currency) -> Option<HistoryRequest> {
        if self.currency == currency {
            return None;
        }
        self.currency = currency;

        if !self.open {
            return None;
        }
        let coin_id = self.selected.as_ref()?.id.clone();
        Some(self.issue(HistoryKey::new(coin_id, currency, self.days)))
    }

    /// Store a history response. Returns `false` if the request was superseded.
    ///
    /// Failures store an empty history, which renders as "no data".
    pub fn apply_history(
        &mut self,
        request: &HistoryRequest,
        outcome: FetchOutcome<HistoricalPoint>,
    ) -> bool {
        if request.seq != self.seq || self.key.as_ref() != Some(&request.key) {
            tracing::debug!(key = %request.key, "Discarding stale history response");
            return false;
        }
        self.loading = false;
        self.history = outcome.into_items();
        true
    }

    fn issue(&mut self, key: HistoryKey) -> HistoryRequest {
        self.seq += 1;
        self.history.clear();
        self.loading = true;
        self.key = Some(key.clone());
        HistoryRequest { seq: self.seq, key }
    }
}
