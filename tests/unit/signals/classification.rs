//! Unit tests for current-price classification

use coinsignal::models::{Signal, StatsRecord};
use coinsignal::signals::{classify, within_band, SignalPolicy};

fn levels(buy: f64, sell: f64, stop: f64) -> StatsRecord {
    StatsRecord {
        lowest: stop,
        avg_low: buy / 1.05,
        overall_avg: (buy + sell) / 2.0,
        avg_high: sell / 0.95,
        highest: sell * 1.2,
        buy,
        sell,
        stop,
        feed: (buy + stop) / 2.0,
    }
}

#[test]
fn test_price_at_buy_level_is_buy() {
    assert_eq!(classify(&levels(100.0, 200.0, 90.0), 100.0, 0.2), Signal::Buy);
}

#[test]
fn test_band_edge_is_inclusive() {
    let stats = levels(100.0, 300.0, 90.0);
    assert_eq!(classify(&stats, 120.0, 0.2), Signal::Buy);
    assert_eq!(classify(&stats, 80.0, 0.2), Signal::Buy);
    assert_eq!(classify(&stats, 121.0, 0.2), Signal::Hold);
}

#[test]
fn test_price_near_sell_is_sell() {
    assert_eq!(classify(&levels(100.0, 200.0, 90.0), 210.0, 0.2), Signal::Sell);
}

#[test]
fn test_buy_wins_when_bands_overlap() {
    let stats = levels(100.0, 110.0, 90.0);
    assert!(within_band(105.0, stats.buy, 0.2));
    assert!(within_band(105.0, stats.sell, 0.2));
    assert_eq!(classify(&stats, 105.0, 0.2), Signal::Buy);
}

#[test]
fn test_far_price_is_hold() {
    assert_eq!(classify(&levels(100.0, 200.0, 90.0), 500.0, 0.2), Signal::Hold);
    assert_eq!(classify(&levels(100.0, 200.0, 90.0), 10.0, 0.2), Signal::Hold);
}

#[test]
fn test_classification_is_total() {
    let stats = levels(100.0, 150.0, 80.0);
    for i in 0..=1000 {
        let price = i as f64 * 0.5;
        let signal = classify(&stats, price, 0.2);
        assert!(matches!(signal, Signal::Buy | Signal::Sell | Signal::Hold));
    }
}

#[test]
fn test_stop_guard_reports_wait() {
    let stats = levels(100.0, 200.0, 90.0);
    let guarded = SignalPolicy {
        band_pct: 0.2,
        wait_below_stop: true,
    };
    assert_eq!(guarded.classify(&stats, 85.0), Signal::Wait);
    assert_eq!(guarded.classify(&stats, 95.0), Signal::Buy);
    assert_eq!(SignalPolicy::default().classify(&stats, 85.0), Signal::Buy);
}
