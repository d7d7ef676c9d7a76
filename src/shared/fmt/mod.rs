//! Display formatting for prices, percent changes and chart labels.
//!
//! Everything here is pure and total: unknown inputs fall back to a sensible
//! rendering rather than failing.

pub mod currency;
pub mod num;
pub mod percent;
pub mod time;

pub use currency::{format_currency, LocaleFormat, MAX_FRACTION_DIGITS, MIN_FRACTION_DIGITS};
pub use percent::{format_percent_change, PercentChange, Trend};
pub use time::{format_chart_date, format_clock};
