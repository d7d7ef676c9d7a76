//! High-level client — `CryptoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, request defaults, and accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::coin::Coin;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::price_history::HistoricalPoint;
use crate::error::SdkError;
use crate::http::MarketDataHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_HISTORY_DAYS, DEFAULT_PAGE_SIZE, REQUEST_TIMEOUT};
use crate::shared::{CoinId, Currency};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// The primary entry point for market data.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct CryptoClient {
    pub(crate) http: MarketDataHttp,
    pub(crate) page_size: u32,
    pub(crate) history_days: u32,
}

impl CryptoClient {
    pub fn builder() -> CryptoClientBuilder {
        CryptoClientBuilder::default()
    }

    /// A client against the public API with default settings.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    // ── Fail-soft shortcuts ──────────────────────────────────────────────

    /// Top coins by market cap; empty on any failure (logged, never raised).
    pub async fn fetch_top_coins(&self, currency: Currency, page: u32, per_page: u32) -> Vec<Coin> {
        self.coins().fetch_top(currency, page, per_page).await
    }

    /// Price history of one coin; empty on any failure (logged, never raised).
    pub async fn fetch_coin_history(
        &self,
        coin_id: &CoinId,
        currency: Currency,
        days: u32,
    ) -> Vec<HistoricalPoint> {
        self.price_history().fetch(coin_id, currency, days).await
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn history_days(&self) -> u32 {
        self.history_days
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptoClientBuilder {
    base_url: String,
    timeout: Duration,
    page_size: u32,
    history_days: u32,
}

impl Default for CryptoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }
}

impl CryptoClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn history_days(mut self, days: u32) -> Self {
        self.history_days = days;
        self
    }

    pub fn build(self) -> Result<CryptoClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(SdkError::Validation("page_size must be at least 1".into()));
        }
        if self.history_days == 0 {
            return Err(SdkError::Validation("history_days must be at least 1".into()));
        }

        Ok(CryptoClient {
            http: MarketDataHttp::new(&self.base_url, self.timeout)?,
            page_size: self.page_size,
            history_days: self.history_days,
        })
    }
}
