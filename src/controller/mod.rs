//! Controllers — state containers wired to a data source and a clock.
//!
//! A controller owns its state, issues requests through a [`MarketData`]
//! source, and applies the responses. Presentation code borrows the state
//! for rendering and forwards user input to the controller.
//!
//! [`MarketData`]: crate::source::MarketData

pub mod dashboard;
pub mod detail;
pub mod list;

pub use dashboard::Dashboard;
pub use detail::CoinDetailController;
pub use list::{CoinListController, ListOptions};
