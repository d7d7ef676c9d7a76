//! Wire types for `/coins/markets` (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the `/coins/markets` array.
///
/// Only the fields the dashboard uses are declared; the API sends many more,
/// which serde ignores. Numeric fields are nullable upstream (new listings
/// often have no market cap yet).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinMarketResponse {
    pub id: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub current_price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
}

/// The endpoint returns a bare JSON array.
pub type CoinMarketsResponse = Vec<CoinMarketResponse>;
