//! Binance market data provider implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::messages::{parse_kline_closes, TickerPrice};
use crate::config::MarketConfig;
use crate::error::FetchError;
use crate::models::PriceSeries;
use crate::services::market_data::MarketDataProvider;

/// Binance caps `/klines` at 1000 rows per request
pub const MAX_KLINES: usize = 1000;

pub struct BinanceMarketDataProvider {
    client: Client,
    base_url: String,
}

impl BinanceMarketDataProvider {
    /// Provider with its own HTTP client using the configured request timeout
    pub fn new(config: &MarketConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self::with_client(config.binance_api_base.clone(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `BTC` -> `BTCUSDT`
    pub fn usdt_pair(coin: &str) -> Result<String, FetchError> {
        let coin = coin.trim().to_uppercase();
        let valid = !coin.is_empty()
            && coin.len() <= 20
            && coin.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(FetchError::InvalidSymbol(coin));
        }
        Ok(format!("{}USDT", coin))
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| FetchError::Malformed(format!("invalid base url: {}", e)))?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    /// Single GET; any non-success status is an error
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Binance request failed");
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for BinanceMarketDataProvider {
    async fn daily_closes(&self, coin: &str, limit: usize) -> Result<PriceSeries, FetchError> {
        let symbol = Self::usdt_pair(coin)?;
        let limit = limit.clamp(1, MAX_KLINES).to_string();
        let url = self.endpoint(
            "klines",
            &[("symbol", &symbol), ("interval", "1d"), ("limit", &limit)],
        )?;

        let body = self.get_json(url).await?;
        let closes = parse_kline_closes(&body)?;
        debug!(symbol = %symbol, count = closes.len(), "Fetched daily closes");
        Ok(PriceSeries::new(closes))
    }

    async fn latest_price(&self, coin: &str) -> Result<f64, FetchError> {
        let symbol = Self::usdt_pair(coin)?;
        let url = self.endpoint("ticker/price", &[("symbol", &symbol)])?;

        let body = self.get_json(url).await?;
        let ticker: TickerPrice =
            serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        let price = ticker.value()?;
        debug!(symbol = %ticker.symbol, price = price, "Fetched latest price");
        Ok(price)
    }

    fn source_name(&self) -> &'static str {
        "Binance"
    }
}
