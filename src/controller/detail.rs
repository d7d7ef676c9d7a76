//! Coin detail controller — opens a coin and loads its price history.

use crate::domain::coin::Coin;
use crate::domain::price_history::{CoinDetailState, HistoryRequest};
use crate::network::DEFAULT_HISTORY_DAYS;
use crate::shared::Currency;
use crate::source::MarketData;

pub struct CoinDetailController<S> {
    source: S,
    state: CoinDetailState,
}

impl<S: MarketData> CoinDetailController<S> {
    pub fn new(source: S, currency: Currency) -> Self {
        Self::with_days(source, currency, DEFAULT_HISTORY_DAYS)
    }

    pub fn with_days(source: S, currency: Currency, days: u32) -> Self {
        Self {
            source,
            state: CoinDetailState::new(currency, days),
        }
    }

    pub fn state(&self) -> &CoinDetailState {
        &self.state
    }

    /// Open the view for `coin` and load its history.
    ///
    /// Returns `false` if the response was superseded before it arrived.
    pub async fn open(&mut self, coin: Coin) -> bool {
        let request = self.state.open(coin);
        self.load(request).await
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    /// Record the new currency; an open view reloads its history.
    pub async fn set_currency(&mut self, currency: Currency) -> bool {
        match self.state.set_currency(currency) {
            Some(request) => self.load(request).await,
            None => false,
        }
    }

    async fn load(&mut self, request: HistoryRequest) -> bool {
        let key = &request.key;
        let outcome = self
            .source
            .coin_history(&key.coin_id, key.currency, key.days)
            .await;
        if outcome.is_empty() {
            tracing::debug!(key = %key, "No price history to show");
        }
        self.state.apply_history(&request, outcome)
    }
}
