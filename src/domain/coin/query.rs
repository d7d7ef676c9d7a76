//! Search filtering and column sorting for the coin table.

use super::Coin;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Price,
    Change24h,
    MarketCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction. Starts as market cap, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::MarketCap,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Clicking the active column flips direction; any other column
    /// becomes active with descending order.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    /// Whether `field` is the active column (for header arrow rendering).
    pub fn is_active(&self, field: SortField) -> bool {
        self.field == field
    }

    pub fn compare(&self, a: &Coin, b: &Coin) -> Ordering {
        let ordering = compare_by(self.field, a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// One row of the derived table view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinRow<'a> {
    /// 1-based position in the sorted view.
    pub rank: usize,
    pub coin: &'a Coin,
}

/// Ascending comparison on a single column.
pub fn compare_by(field: SortField, a: &Coin, b: &Coin) -> Ordering {
    match field {
        SortField::Name => locale_compare(&a.name, &b.name),
        SortField::Price => a.current_price.cmp(&b.current_price),
        SortField::Change24h => a
            .price_change_percentage_24h
            .cmp(&b.price_change_percentage_24h),
        SortField::MarketCap => a.market_cap.cmp(&b.market_cap),
    }
}

/// Collation in three levels: base letters, then accents, then case
/// (lower case first among otherwise equal names).
///
/// Accents are folded for Latin-1 and Latin Extended-A letters only; other
/// scripts compare by code point after lower-casing.
fn locale_compare(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    fold_accents(&a_lower)
        .cmp(fold_accents(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| b.cmp(a))
}

fn fold_accents(lower: &str) -> impl Iterator<Item = char> + '_ {
    lower.chars().map(|c| match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' | 'ĺ' | 'ļ' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    })
}

/// Coins whose name or symbol contains `search`, ignoring case. Order preserved.
///
/// The text is matched as typed; only an empty search keeps every coin.
pub fn filter_coins<'a>(coins: &'a [Coin], search: &str) -> Vec<&'a Coin> {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return coins.iter().collect();
    }
    coins
        .iter()
        .filter(|coin| coin.matches_lowercase(&needle))
        .collect()
}

/// Stable sort: coins that compare equal keep their relative order.
pub fn sort_coins(coins: &mut [&Coin], sort: SortState) {
    coins.sort_by(|a, b| sort.compare(a, b));
}
