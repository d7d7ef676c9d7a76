//! Network constants and defaults for the market-data API.

use std::time::Duration;

/// Default REST API base URL (CoinGecko public v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Coins requested per page of `/coins/markets`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// First page of `/coins/markets` (the API is 1-indexed).
pub const DEFAULT_PAGE: u32 = 1;

/// Lookback window for a coin's price history, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Interval between auto-refreshes of the coin list.
pub const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Per-request timeout (native only; browsers apply their own).
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
