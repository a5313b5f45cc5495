//! Market data provider interface

use crate::error::FetchError;
use crate::models::PriceSeries;

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily closing prices for `coin`, oldest first, at most `limit` days
    async fn daily_closes(&self, coin: &str, limit: usize) -> Result<PriceSeries, FetchError>;

    /// Latest traded price for `coin`
    async fn latest_price(&self, coin: &str) -> Result<f64, FetchError>;

    /// Name shown in embed footers
    fn source_name(&self) -> &'static str;
}
