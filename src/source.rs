//! `MarketData` — the seam between controllers and the network.
//!
//! Controllers are generic over this trait so an app can plug in the HTTP
//! client and tests can plug in scripted responses.

use crate::domain::coin::Coin;
use crate::domain::price_history::HistoricalPoint;
use crate::shared::{CoinId, Currency, FetchOutcome};
use async_trait::async_trait;

/// A source of coin listings and price histories.
///
/// Futures are not required to be `Send`: controllers run on one logical
/// thread (a UI event loop or a WASM executor).
#[async_trait(?Send)]
pub trait MarketData {
    /// One page of coins ordered by market cap, descending.
    async fn top_coins(&self, currency: Currency, page: u32, per_page: u32) -> FetchOutcome<Coin>;

    /// Price samples for one coin over the last `days` days.
    async fn coin_history(
        &self,
        coin_id: &CoinId,
        currency: Currency,
        days: u32,
    ) -> FetchOutcome<HistoricalPoint>;
}

#[cfg(feature = "http")]
#[async_trait(?Send)]
impl MarketData for crate::client::CryptoClient {
    async fn top_coins(&self, currency: Currency, page: u32, per_page: u32) -> FetchOutcome<Coin> {
        self.coins().top(currency, page, per_page).await
    }

    async fn coin_history(
        &self,
        coin_id: &CoinId,
        currency: Currency,
        days: u32,
    ) -> FetchOutcome<HistoricalPoint> {
        self.price_history().get(coin_id, currency, days).await
    }
}

#[async_trait(?Send)]
impl<T: MarketData + ?Sized> MarketData for std::rc::Rc<T> {
    async fn top_coins(&self, currency: Currency, page: u32, per_page: u32) -> FetchOutcome<Coin> {
        (**self).top_coins(currency, page, per_page).await
    }

    async fn coin_history(
        &self,
        coin_id: &CoinId,
        currency: Currency,
        days: u32,
    ) -> FetchOutcome<HistoricalPoint> {
        (**self).coin_history(coin_id, currency, days).await
    }
}
