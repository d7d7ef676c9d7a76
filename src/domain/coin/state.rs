//! Coin list state container — app-owned, library-provided update logic.

use super::query::{filter_coins, sort_coins, CoinRow, SortField, SortState};
use super::Coin;
use crate::shared::fmt::format_clock;
use crate::shared::{Currency, FetchOutcome};
use chrono::{DateTime, Utc};

/// Banner text shown when a list refresh fails.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch cryptocurrency data. Please try again later.";

/// Shown in place of the table when the filtered view is empty.
pub const NO_RESULTS_MESSAGE: &str = "No cryptocurrencies found.";

/// Tag for one in-flight list request.
///
/// Only the most recently issued ticket may apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub seq: u64,
    pub currency: Currency,
}

/// What `apply_refresh` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshApplied {
    /// The list was replaced.
    Replaced { count: usize },
    /// The fetch failed or came back empty; the previous list is kept.
    Failed,
    /// A newer request or a currency change superseded this one.
    Stale,
}

/// Everything the coin table renders: list, currency, search, sort, flags.
///
/// The app owns instances of this type; the controller drives it.
#[derive(Debug, Clone, Default)]
pub struct CoinListState {
    coins: Vec<Coin>,
    currency: Currency,
    search: String,
    sort: SortState,
    auto_refresh: bool,
    last_updated: Option<DateTime<Utc>>,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

impl CoinListState {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The last successfully fetched list, in API order.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// `"Last updated: 02:05:09 PM"`-style clock text, if a refresh ever succeeded.
    pub fn last_updated_label(&self) -> Option<String> {
        self.last_updated.as_ref().map(format_clock)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Banner text, if the last refresh failed and the banner was not dismissed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ── Input ────────────────────────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.sort.select(field);
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    /// Switch currency. Returns `false` if it was already active.
    ///
    /// Any in-flight request for the old currency becomes stale.
    pub fn set_currency(&mut self, currency: Currency) -> bool {
        if self.currency == currency {
            return false;
        }
        self.currency = currency;
        self.seq += 1;
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ── Refresh cycle ────────────────────────────────────────────────────

    /// Mark a refresh as started and issue its ticket.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.seq += 1;
        self.loading = true;
        RefreshTicket {
            seq: self.seq,
            currency: self.currency,
        }
    }

    /// Whether `ticket` is the latest request for the active currency.
    pub fn is_current(&self, ticket: &RefreshTicket) -> bool {
        ticket.seq == self.seq && ticket.currency == self.currency
    }

    /// Apply a list response.
    ///
    /// A loaded response replaces the whole list. An empty or failed one
    /// keeps the previous list and raises the error banner. Responses for a
    /// superseded ticket are dropped.
    pub fn apply_refresh(
        &mut self,
        ticket: &RefreshTicket,
        outcome: FetchOutcome<Coin>,
        now: DateTime<Utc>,
    ) -> RefreshApplied {
        if !self.is_current(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                currency = %ticket.currency,
                active = %self.currency,
                "Discarding stale coin list response"
            );
            return RefreshApplied::Stale;
        }

        self.loading = false;
        match outcome {
            FetchOutcome::Loaded(coins) => {
                let count = coins.len();
                self.coins = coins;
                self.last_updated = Some(now);
                self.error = None;
                RefreshApplied::Replaced { count }
            }
            FetchOutcome::Empty | FetchOutcome::Failed(_) => {
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                RefreshApplied::Failed
            }
        }
    }

    // ── Derived view ─────────────────────────────────────────────────────

    /// Filtered by search, then stably sorted by the active column.
    pub fn view(&self) -> Vec<CoinRow<'_>> {
        let mut filtered = filter_coins(&self.coins, &self.search);
        sort_coins(&mut filtered, self.sort);
        filtered
            .into_iter()
            .enumerate()
            .map(|(i, coin)| CoinRow { rank: i + 1, coin })
            .collect()
    }
}
