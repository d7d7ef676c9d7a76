//! Coin domain — market snapshot of one cryptocurrency, validation, list queries.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod query;
pub mod state;
pub mod wire;

use crate::shared::{format_percent_change, CoinId, PercentChange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use convert::validate_rows;
pub use query::{filter_coins, sort_coins, CoinRow, SortDirection, SortField, SortState};
pub use state::{CoinListState, RefreshApplied, RefreshTicket};

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A validated market snapshot for one coin.
///
/// Snapshots are immutable; a refresh replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    /// Logo URL.
    pub image: String,
    pub current_price: Decimal,
    pub market_cap: Decimal,
    pub price_change_percentage_24h: Decimal,
}

impl Coin {
    /// Ticker in upper case (`"BTC"`), as shown next to the name.
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    pub fn price_change(&self) -> PercentChange {
        format_percent_change(self.price_change_percentage_24h)
    }

    /// Case-insensitive substring match on name or symbol.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingName,
    MissingSymbol,
    MissingPrice,
    NegativePrice(Decimal),
    NegativeMarketCap(Decimal),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Coin validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingPrice => write!(f, "Missing current price"),
            ValidationError::NegativePrice(p) => write!(f, "Negative current price: {}", p),
            ValidationError::NegativeMarketCap(m) => write!(f, "Negative market cap: {}", m),
        }
    }
}

impl std::error::Error for ValidationError {}
