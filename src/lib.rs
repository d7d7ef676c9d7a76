//! # Crypto Price Monitor
//!
//! Core of a cryptocurrency price dashboard, usable from native and WASM front ends.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Newtypes, formatting, domain models, state containers (always available, WASM-safe)
//! 2. **HTTP API** — `MarketDataHttp`, one GET per endpoint, no retry
//! 3. **High-Level Client** — `CryptoClient` with nested sub-clients and fail-soft shortcuts
//! 4. **Controllers** — list/detail controllers over a `MarketData` source and an injectable clock
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crypto_price_monitor::prelude::*;
//!
//! let client = CryptoClient::builder()
//!     .base_url("https://api.coingecko.com/api/v3")
//!     .build()?;
//!
//! let coins = client.fetch_top_coins(Currency::Usd, 1, 20).await;
//!
//! let mut dashboard = Dashboard::new(client, SystemClock::new(), Currency::Usd, ListOptions::default());
//! dashboard.start().await;
//! dashboard.list_mut().set_auto_refresh(true);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, currency formatting, fetch outcomes.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// API URL and request defaults.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CryptoClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Controllers ─────────────────────────────────────────────────────

/// The `MarketData` data-source trait.
pub mod source;

/// Clocks and the cancellable auto-refresh timer.
pub mod schedule;

/// List, detail and dashboard controllers.
pub mod controller;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{format_chart_date, format_clock};
    pub use crate::shared::{
        format_currency, format_percent_change, CoinId, Currency, FetchOutcome, PercentChange,
        Trend,
    };

    // Domain types — coin
    pub use crate::domain::coin::{
        Coin, CoinListState, CoinRow, RefreshApplied, SortDirection, SortField, SortState,
    };

    // Domain types — price history
    pub use crate::domain::price_history::{
        ChartSeries, CoinDetailState, DetailBody, HistoricalPoint, HistoryKey,
    };

    // Errors
    pub use crate::error::{FailureKind, HttpError, SdkError};

    // Network
    pub use crate::network::{AUTO_REFRESH_INTERVAL, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinsClient, CryptoClient, CryptoClientBuilder, PriceHistorySubClient};

    // Controllers
    pub use crate::controller::{CoinDetailController, CoinListController, Dashboard, ListOptions};
    pub use crate::schedule::{Clock, ManualClock, RefreshTimer, SystemClock};
    pub use crate::source::MarketData;
}
