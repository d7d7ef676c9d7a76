//! Dashboard — the single owner of process-wide UI state.
//!
//! Holds the list and detail controllers over one shared data source and
//! keeps their currency in step.

use super::detail::CoinDetailController;
use super::list::{CoinListController, ListOptions};
use crate::domain::coin::{Coin, RefreshApplied};
use crate::schedule::Clock;
use crate::shared::{CoinId, Currency};
use crate::source::MarketData;

use std::rc::Rc;

pub struct Dashboard<S, C> {
    list: CoinListController<Rc<S>, C>,
    detail: CoinDetailController<Rc<S>>,
}

impl<S: MarketData, C: Clock> Dashboard<S, C> {
    pub fn new(source: S, clock: C, currency: Currency, options: ListOptions) -> Self {
        let source = Rc::new(source);
        Self {
            list: CoinListController::new(Rc::clone(&source), clock, currency, options),
            detail: CoinDetailController::new(source, currency),
        }
    }

    /// Initial load of the coin list. `None` once torn down.
    pub async fn start(&mut self) -> Option<RefreshApplied> {
        self.list.refresh().await
    }

    pub fn list(&self) -> &CoinListController<Rc<S>, C> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CoinListController<Rc<S>, C> {
        &mut self.list
    }

    pub fn detail(&self) -> &CoinDetailController<Rc<S>> {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut CoinDetailController<Rc<S>> {
        &mut self.detail
    }

    pub fn currency(&self) -> Currency {
        self.list.state().currency()
    }

    /// Switch currency everywhere: the list refetches, an open detail view reloads.
    pub async fn set_currency(&mut self, currency: Currency) {
        self.list.set_currency(currency).await;
        self.detail.set_currency(currency).await;
    }

    /// Switch currency from a selector code such as `"eur"`. Codes match exactly;
    /// anything else (including `"EUR"`) selects USD.
    pub async fn set_currency_code(&mut self, code: &str) {
        self.set_currency(Currency::from_code_or_default(code)).await;
    }

    /// Open the detail view for a coin in the current list.
    ///
    /// Returns `false` if no listed coin has that id.
    pub async fn open_coin(&mut self, id: &CoinId) -> bool {
        let Some(coin) = self.find(id) else {
            tracing::debug!(coin = %id, "Coin not in current list");
            return false;
        };
        self.detail.open(coin).await;
        true
    }

    pub fn close_coin(&mut self) {
        self.detail.close();
    }

    /// Run a list refresh if the auto-refresh timer is due.
    pub async fn tick(&mut self) -> Option<RefreshApplied> {
        self.list.tick().await
    }

    pub fn teardown(&mut self) {
        self.list.teardown();
        self.detail.close();
    }

    fn find(&self, id: &CoinId) -> Option<Coin> {
        self.list
            .state()
            .coins()
            .iter()
            .find(|coin| &coin.id == id)
            .cloned()
    }
}
