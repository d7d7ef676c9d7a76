//! Coins sub-client — top coins by market cap.

use crate::client::CryptoClient;
use crate::domain::coin::{validate_rows, Coin};
use crate::shared::{Currency, FetchOutcome};

/// Sub-client for the `/coins/markets` listing.
pub struct Coins<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> Coins<'a> {
    /// One page of coins ordered by market cap, descending.
    ///
    /// Exactly one request; no retry. Rows that fail validation are dropped.
    pub async fn top(&self, currency: Currency, page: u32, per_page: u32) -> FetchOutcome<Coin> {
        match self
            .client
            .http
            .get_coin_markets(currency.as_str(), page, per_page)
            .await
        {
            Ok(rows) => FetchOutcome::from_items(validate_rows(rows)),
            Err(err) => {
                tracing::warn!(
                    currency = %currency,
                    page,
                    kind = %err.kind(),
                    "Error fetching top coins: {}",
                    err
                );
                FetchOutcome::Failed(err.into())
            }
        }
    }

    /// First page with the client's configured page size.
    pub async fn first_page(&self, currency: Currency) -> FetchOutcome<Coin> {
        self.top(currency, crate::network::DEFAULT_PAGE, self.client.page_size)
            .await
    }

    /// Fail-soft variant: an empty vector on any failure.
    pub async fn fetch_top(&self, currency: Currency, page: u32, per_page: u32) -> Vec<Coin> {
        self.top(currency, page, per_page).await.into_items()
    }
}
