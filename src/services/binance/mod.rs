//! Binance spot REST market data

pub mod messages;
pub mod provider;

pub use provider::BinanceMarketDataProvider;
