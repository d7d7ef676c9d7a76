//! Locale-aware currency rendering.
//!
//! Each supported currency maps to one fixed locale:
//!
//! | code  | locale  | example        |
//! |-------|---------|----------------|
//! | `usd` | `en-US` | `$1,234.50`    |
//! | `eur` | `de-DE` | `1.234,50 €`   |
//! | `ngn` | `en-NG` | `₦1,234.50`    |
//!
//! Unrecognized codes render as `usd`.

use super::num::localize_unsigned;
use crate::shared::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fewest fraction digits shown (`$5.00`).
pub const MIN_FRACTION_DIGITS: u32 = 2;

/// Most fraction digits shown, enough for sub-cent coins (`$0.000012`).
pub const MAX_FRACTION_DIGITS: u32 = 6;

/// Locale conventions for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub locale: &'static str,
    pub code: &'static str,
    pub symbol: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    /// `true` when the symbol trails the number (`1,00 €`).
    pub symbol_after: bool,
}

const EN_US_USD: LocaleFormat = LocaleFormat {
    locale: "en-US",
    code: "USD",
    symbol: "$",
    group_separator: ',',
    decimal_separator: '.',
    symbol_after: false,
};

const DE_DE_EUR: LocaleFormat = LocaleFormat {
    locale: "de-DE",
    code: "EUR",
    symbol: "€",
    group_separator: '.',
    decimal_separator: ',',
    symbol_after: true,
};

const EN_NG_NGN: LocaleFormat = LocaleFormat {
    locale: "en-NG",
    code: "NGN",
    symbol: "₦",
    group_separator: ',',
    decimal_separator: '.',
    symbol_after: false,
};

impl LocaleFormat {
    pub fn for_currency(currency: Currency) -> &'static LocaleFormat {
        match currency {
            Currency::Usd => &EN_US_USD,
            Currency::Eur => &DE_DE_EUR,
            Currency::Ngn => &EN_NG_NGN,
        }
    }

    /// Lookup by code, falling back to the default currency's locale.
    pub fn for_code(code: &str) -> &'static LocaleFormat {
        Self::for_currency(Currency::from_code_or_default(code))
    }
}

/// Format `value` as a price in the currency named by `code`.
pub fn format_currency(value: Decimal, code: &str) -> String {
    let locale = LocaleFormat::for_code(code);

    let rounded =
        value.round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    // A negative value keeps its sign even when it rounds to zero.
    let sign = if value < Decimal::ZERO {
        "-"
    } else {
        ""
    };

    let body = localize_unsigned(
        &rounded.abs().to_string(),
        locale.group_separator,
        locale.decimal_separator,
        MIN_FRACTION_DIGITS as usize,
    );

    if locale.symbol_after {
        format!("{}{}\u{a0}{}", sign, body, locale.symbol)
    } else {
        format!("{}{}{}", sign, locale.symbol, body)
    }
}
