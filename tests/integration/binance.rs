//! Binance market data provider against a mocked REST API

use std::time::Duration;

use coinsignal::error::FetchError;
use coinsignal::services::{BinanceMarketDataProvider, MarketDataProvider};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{klines, mock_klines, mock_ticker};

fn provider(server: &MockServer) -> BinanceMarketDataProvider {
    BinanceMarketDataProvider::with_client(server.uri(), reqwest::Client::new())
}

#[tokio::test]
async fn test_daily_closes_sends_pair_interval_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(query_param("symbol", "ETHUSDT"))
        .and(query_param("interval", "1d"))
        .and(query_param("limit", "90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(klines(&[1.0, 2.0, 3.5])))
        .expect(1)
        .mount(&server)
        .await;

    let series = provider(&server).daily_closes("eth", 90).await.unwrap();

    assert_eq!(series.closes(), &[1.0, 2.0, 3.5]);
    assert_eq!(series.latest(), Some(3.5));
}

#[tokio::test]
async fn test_latest_price_parses_string_price() {
    let server = MockServer::start().await;
    mock_ticker(&server, "BTCUSDT", "64250.12000000").await;

    let price = provider(&server).latest_price("BTC").await.unwrap();

    assert!((price - 64250.12).abs() < 1e-9);
}

#[tokio::test]
async fn test_unknown_symbol_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"code": -1121, "msg": "Invalid symbol."})),
        )
        .mount(&server)
        .await;

    let result = provider(&server).daily_closes("NOPE", 90).await;

    assert!(matches!(result, Err(FetchError::Status(400))));
}

#[tokio::test]
async fn test_object_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let result = provider(&server).daily_closes("BTC", 90).await;

    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn test_non_numeric_ticker_price_is_malformed() {
    let server = MockServer::start().await;
    mock_ticker(&server, "BTCUSDT", "not-a-number").await;

    let result = provider(&server).latest_price("BTC").await;

    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn test_invalid_coin_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = provider(&server).latest_price("BTC/ETH").await;

    assert!(matches!(result, Err(FetchError::InvalidSymbol(_))));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ticker/price"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"symbol": "BTCUSDT", "price": "1.0"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let provider = BinanceMarketDataProvider::with_client(server.uri(), client);

    let result = provider.latest_price("BTC").await;

    assert!(matches!(result, Err(FetchError::Http(_))));
}

#[tokio::test]
async fn test_mocked_history_feeds_a_full_series() {
    let server = MockServer::start().await;
    let closes: Vec<f64> = (1..=90).map(f64::from).collect();
    mock_klines(&server, "SOLUSDT", &closes).await;

    let series = provider(&server).daily_closes("sol", 90).await.unwrap();

    assert_eq!(series.len(), 90);
    assert_eq!(series.trailing(30).map(|w| w[0]), Some(61.0));
}
