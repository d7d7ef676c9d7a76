//! Price history sub-client — market chart queries.

use super::HistoricalPoint;
use crate::client::CryptoClient;
use crate::shared::{CoinId, Currency, FetchOutcome};

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CryptoClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Price samples for `coin_id` over the last `days` days.
    pub async fn get(
        &self,
        coin_id: &CoinId,
        currency: Currency,
        days: u32,
    ) -> FetchOutcome<HistoricalPoint> {
        match self
            .client
            .http
            .get_market_chart(coin_id.as_str(), currency.as_str(), days)
            .await
        {
            Ok(resp) => FetchOutcome::from_items(resp.into_points()),
            Err(err) => {
                tracing::warn!(
                    coin_id = %coin_id,
                    currency = %currency,
                    days,
                    kind = %err.kind(),
                    "Error fetching history: {}",
                    err
                );
                FetchOutcome::Failed(err.into())
            }
        }
    }

    /// History over the client's configured window.
    pub async fn default_window(
        &self,
        coin_id: &CoinId,
        currency: Currency,
    ) -> FetchOutcome<HistoricalPoint> {
        self.get(coin_id, currency, self.client.history_days).await
    }

    /// Fail-soft variant: an empty vector on any failure.
    pub async fn fetch(&self, coin_id: &CoinId, currency: Currency, days: u32) -> Vec<HistoricalPoint> {
        self.get(coin_id, currency, days).await.into_items()
    }
}
