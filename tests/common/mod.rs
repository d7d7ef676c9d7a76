//! Scripted `MarketData` source shared by the controller tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crypto_price_monitor::domain::coin::Coin;
use crypto_price_monitor::domain::price_history::{HistoricalPoint, HistoryKey};
use crypto_price_monitor::error::{HttpError, SdkError};
use crypto_price_monitor::shared::{CoinId, Currency, FetchOutcome};
use crypto_price_monitor::source::MarketData;

/// One request the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    TopCoins {
        currency: Currency,
        page: u32,
        per_page: u32,
    },
    History(HistoryKey),
}

/// Answers queued outcomes in order; once a queue runs dry, a default
/// two-coin list (or a single-point history) is returned.
#[derive(Default)]
pub struct ScriptedSource {
    lists: RefCell<VecDeque<FetchOutcome<Coin>>>,
    histories: RefCell<VecDeque<FetchOutcome<HistoricalPoint>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, outcome: FetchOutcome<Coin>) {
        self.lists.borrow_mut().push_back(outcome);
    }

    pub fn push_history(&self, outcome: FetchOutcome<HistoricalPoint>) {
        self.histories.borrow_mut().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::TopCoins { .. }))
            .count()
    }

    pub fn history_calls(&self) -> Vec<HistoryKey> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::History(key) => Some(key.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl MarketData for ScriptedSource {
    async fn top_coins(&self, currency: Currency, page: u32, per_page: u32) -> FetchOutcome<Coin> {
        self.calls.borrow_mut().push(Call::TopCoins {
            currency,
            page,
            per_page,
        });
        self.lists
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| FetchOutcome::Loaded(default_coins()))
    }

    async fn coin_history(
        &self,
        coin_id: &CoinId,
        currency: Currency,
        days: u32,
    ) -> FetchOutcome<HistoricalPoint> {
        self.calls.borrow_mut().push(Call::History(HistoryKey::new(
            coin_id.clone(),
            currency,
            days,
        )));
        self.histories
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| FetchOutcome::Loaded(history(&[1])))
    }
}

pub fn coin(id: &str, name: &str, symbol: &str, price: i64, cap: i64) -> Coin {
    Coin {
        id: CoinId::from(id),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: format!("https://img.example/{id}.png"),
        current_price: Decimal::from(price),
        market_cap: Decimal::from(cap),
        price_change_percentage_24h: Decimal::new(-125, 2),
    }
}

pub fn default_coins() -> Vec<Coin> {
    vec![
        coin("bitcoin", "Bitcoin", "btc", 64_000, 1_260_000_000_000),
        coin("ethereum", "Ethereum", "eth", 3_100, 372_000_000_000),
    ]
}

pub fn history(prices: &[i64]) -> Vec<HistoricalPoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| HistoricalPoint {
            timestamp: 1_709_596_800_000 + i as i64 * 3_600_000,
            price: Decimal::from(*price),
        })
        .collect()
}

pub fn network_failure<T>() -> FetchOutcome<T> {
    FetchOutcome::Failed(SdkError::Http(HttpError::ServerError {
        status: 503,
        body: "unavailable".into(),
    }))
}
