//! Coin list controller — refresh cycle, input handling, auto-refresh.

use crate::domain::coin::{CoinListState, RefreshApplied, SortField};
use crate::network::{AUTO_REFRESH_INTERVAL, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::schedule::{Clock, RefreshTimer};
use crate::shared::{Currency, FetchOutcome};
use crate::source::MarketData;

use std::time::Duration;

/// Request and polling settings for a [`CoinListController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u32,
    pub refresh_interval: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PAGE_SIZE,
            refresh_interval: AUTO_REFRESH_INTERVAL,
        }
    }
}

/// Drives a [`CoinListState`] against a market-data source.
///
/// Auto-refresh is off until [`set_auto_refresh(true)`](Self::set_auto_refresh).
/// The owner polls [`tick`](Self::tick) (or awaits
/// [`wait_and_tick`](Self::wait_and_tick)); a refresh is issued whenever the
/// timer is due. After [`teardown`](Self::teardown) nothing fetches again.
pub struct CoinListController<S, C> {
    source: S,
    clock: C,
    state: CoinListState,
    timer: RefreshTimer,
    options: ListOptions,
    torn_down: bool,
}

impl<S: MarketData, C: Clock> CoinListController<S, C> {
    pub fn new(source: S, clock: C, currency: Currency, options: ListOptions) -> Self {
        Self {
            source,
            clock,
            state: CoinListState::new(currency),
            timer: RefreshTimer::new(options.refresh_interval),
            options,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &CoinListState {
        &self.state
    }

    pub fn options(&self) -> ListOptions {
        self.options
    }

    pub fn timer(&self) -> &RefreshTimer {
        &self.timer
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Fetch the first page for the active currency and apply it.
    ///
    /// Returns `None` without fetching once the controller is torn down.
    pub async fn refresh(&mut self) -> Option<RefreshApplied> {
        if self.torn_down {
            return None;
        }

        let ticket = self.state.begin_refresh();
        let outcome = self
            .source
            .top_coins(ticket.currency, self.options.page, self.options.per_page)
            .await;

        if let FetchOutcome::Failed(err) = &outcome {
            tracing::error!(
                currency = %ticket.currency,
                kind = %err.kind(),
                "Coin list refresh failed: {}",
                err
            );
        }

        let applied = self.state.apply_refresh(&ticket, outcome, self.clock.wall_now());
        if let RefreshApplied::Replaced { count } = applied {
            tracing::debug!(currency = %ticket.currency, count, "Coin list refreshed");
        }
        Some(applied)
    }

    /// Switch currency and refetch. The auto-refresh schedule restarts from now.
    ///
    /// Returns `None` if the currency was already active or the controller
    /// is torn down.
    pub async fn set_currency(&mut self, currency: Currency) -> Option<RefreshApplied> {
        if !self.state.set_currency(currency) {
            return None;
        }
        self.restart_timer();
        self.refresh().await
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.set_search(text);
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.state.set_sort(field);
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    /// Turn polling on or off. Re-asserting the current setting keeps the
    /// running schedule.
    pub fn set_auto_refresh(&mut self, enabled: bool) {
        if enabled == self.state.auto_refresh() {
            return;
        }
        self.state.set_auto_refresh(enabled);
        self.restart_timer();
    }

    /// Run a refresh if the auto-refresh timer is due.
    pub async fn tick(&mut self) -> Option<RefreshApplied> {
        if self.torn_down || !self.timer.fire_if_due(self.clock.now()) {
            return None;
        }
        tracing::debug!(generation = self.timer.generation(), "Auto-refresh timer fired");
        self.refresh().await
    }

    /// Sleep until the timer is due, then tick. Returns `None` immediately
    /// when auto-refresh is off or the controller is torn down.
    #[cfg(feature = "http")]
    pub async fn wait_and_tick(&mut self) -> Option<RefreshApplied> {
        if self.torn_down {
            return None;
        }
        let wait = self.timer.due_in(self.clock.now())?;
        if !wait.is_zero() {
            futures_timer::Delay::new(wait).await;
        }
        self.tick().await
    }

    /// Cancel the timer for good. Later ticks, refreshes and re-enables do nothing.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.timer.cancel();
    }

    fn restart_timer(&mut self) {
        self.timer.cancel();
        if self.state.auto_refresh() && !self.torn_down {
            self.timer.start(self.clock.now());
        }
    }
}

impl<S, C> Drop for CoinListController<S, C> {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
