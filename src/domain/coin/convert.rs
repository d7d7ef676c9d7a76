//! Conversion: CoinMarketResponse → Coin (TryFrom + validation).

use super::wire::CoinMarketResponse;
use super::{Coin, ValidationError};
use crate::shared::CoinId;
use rust_decimal::Decimal;

impl TryFrom<CoinMarketResponse> for Coin {
    type Error = ValidationError;

    fn try_from(source: CoinMarketResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let id = CoinId::from(source.id.trim());
        if id.is_empty() {
            errors.push(ValidationError::MissingId);
        }

        let name = match source.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                errors.push(ValidationError::MissingName);
                String::new()
            }
        };

        let symbol = match source.symbol {
            Some(symbol) if !symbol.trim().is_empty() => symbol,
            _ => {
                errors.push(ValidationError::MissingSymbol);
                String::new()
            }
        };

        let current_price = source.current_price.unwrap_or_else(|| {
            errors.push(ValidationError::MissingPrice);
            Decimal::ZERO
        });
        if current_price.is_sign_negative() && !current_price.is_zero() {
            errors.push(ValidationError::NegativePrice(current_price));
        }

        let market_cap = source.market_cap.unwrap_or(Decimal::ZERO);
        if market_cap.is_sign_negative() && !market_cap.is_zero() {
            errors.push(ValidationError::NegativeMarketCap(market_cap));
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id, errors));
        }

        Ok(Coin {
            id,
            symbol,
            name,
            image: source.image.unwrap_or_default(),
            current_price,
            market_cap,
            price_change_percentage_24h: source
                .price_change_percentage_24h
                .unwrap_or(Decimal::ZERO),
        })
    }
}

/// Convert a decoded page, dropping (and logging) rows that fail validation.
///
/// Upstream order is kept.
pub fn validate_rows(rows: Vec<CoinMarketResponse>) -> Vec<Coin> {
    let total = rows.len();
    let coins: Vec<Coin> = rows
        .into_iter()
        .filter_map(|row| match Coin::try_from(row) {
            Ok(coin) => Some(coin),
            Err(err) => {
                tracing::warn!("Dropping invalid coin row: {}", err);
                None
            }
        })
        .collect();

    if coins.len() < total {
        tracing::debug!(kept = coins.len(), total, "Validated coin rows");
    }
    coins
}
