//! HTTP client layer — `MarketDataHttp`, one method per endpoint.

pub mod client;

pub use client::MarketDataHttp;
