//! Unit tests for window statistics and the weighted blend

use coinsignal::error::StatsError;
use coinsignal::models::{PriceSeries, StatsRecord};
use coinsignal::signals::{
    calculate_stats, split_halves_stats, weighted_series_stats, weighted_stats, WindowWeights,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn assert_records_close(a: &StatsRecord, b: &StatsRecord) {
    assert_close(a.lowest, b.lowest);
    assert_close(a.avg_low, b.avg_low);
    assert_close(a.overall_avg, b.overall_avg);
    assert_close(a.avg_high, b.avg_high);
    assert_close(a.highest, b.highest);
    assert_close(a.buy, b.buy);
    assert_close(a.sell, b.sell);
    assert_close(a.stop, b.stop);
    assert_close(a.feed, b.feed);
}

/// Deterministic wavy series around `base`
fn wavy(len: usize, base: f64) -> Vec<f64> {
    (0..len)
        .map(|i| base + (i as f64 * 0.7).sin() * base * 0.1 + i as f64 * 0.05)
        .collect()
}

#[test]
fn test_single_window_ordering() {
    let prices = wavy(90, 100.0);
    let stats = calculate_stats(&prices).unwrap();
    assert!(stats.lowest <= stats.avg_low);
    assert!(stats.avg_low <= stats.overall_avg);
    assert!(stats.overall_avg <= stats.avg_high);
    assert!(stats.avg_high <= stats.highest);
}

#[test]
fn test_weighted_ordering() {
    let series = PriceSeries::new(wavy(90, 42.0));
    let stats = weighted_series_stats(&series, &WindowWeights::default()).unwrap();
    assert!(stats.lowest <= stats.avg_low + EPS);
    assert!(stats.avg_low <= stats.overall_avg + EPS);
    assert!(stats.overall_avg <= stats.avg_high + EPS);
    assert!(stats.avg_high <= stats.highest + EPS);
}

#[test]
fn test_derived_levels() {
    let stats = calculate_stats(&[10.0, 20.0, 30.0, 40.0]).unwrap();
    // mean 25, below-mean {10, 20}, above-mean {30, 40}
    assert_close(stats.avg_low, 15.0);
    assert_close(stats.avg_high, 35.0);
    assert_close(stats.buy, 15.0 * 1.05);
    assert_close(stats.sell, 35.0 * 0.95);
    assert_close(stats.stop, 10.0);
    assert_close(stats.feed, (15.0 * 1.05 + 10.0) / 2.0);
}

#[test]
fn test_flat_windows_example() {
    let last30 = vec![10.0; 30];
    let last60 = vec![20.0; 60];
    let last90 = vec![30.0; 90];
    let stats = weighted_stats(&last30, &last60, &last90, &WindowWeights::default()).unwrap();

    assert_close(stats.overall_avg, 16.0);
    assert_close(stats.avg_low, 16.0);
    assert_close(stats.avg_high, 16.0);
    assert_close(stats.lowest, 16.0);
    assert_close(stats.highest, 16.0);
    assert_close(stats.buy, 16.8);
    assert_close(stats.sell, 15.2);
    assert_close(stats.stop, 16.0);
}

#[test]
fn test_identical_windows_match_single_window() {
    let window = wavy(30, 250.0);
    let weighted = weighted_stats(&window, &window, &window, &WindowWeights::default()).unwrap();
    let single = calculate_stats(&window).unwrap();
    assert_records_close(&weighted, &single);
}

#[test]
fn test_scaling_is_linear() {
    let k = 3.5;
    let short = wavy(30, 10.0);
    let medium = wavy(60, 12.0);
    let long = wavy(90, 9.0);
    let scale = |w: &[f64]| w.iter().map(|v| v * k).collect::<Vec<f64>>();

    let weights = WindowWeights::default();
    let base = weighted_stats(&short, &medium, &long, &weights).unwrap();
    let scaled = weighted_stats(&scale(&short), &scale(&medium), &scale(&long), &weights).unwrap();

    let expected = StatsRecord {
        lowest: base.lowest * k,
        avg_low: base.avg_low * k,
        overall_avg: base.overall_avg * k,
        avg_high: base.avg_high * k,
        highest: base.highest * k,
        buy: base.buy * k,
        sell: base.sell * k,
        stop: base.stop * k,
        feed: base.feed * k,
    };
    assert_records_close(&scaled, &expected);
}

#[test]
fn test_series_uses_trailing_windows() {
    // oldest 30 days at 30, middle 30 at 20, newest 30 at 10
    let mut closes = vec![30.0; 30];
    closes.extend(vec![20.0; 30]);
    closes.extend(vec![10.0; 30]);
    let stats = weighted_series_stats(&PriceSeries::new(closes), &WindowWeights::default()).unwrap();

    assert_close(stats.overall_avg, 0.55 * 10.0 + 0.30 * 15.0 + 0.15 * 20.0);
    assert_close(stats.lowest, 10.0);
    assert_close(stats.highest, 0.55 * 10.0 + 0.30 * 20.0 + 0.15 * 30.0);
    assert_close(stats.avg_low, 10.0);
}

#[test]
fn test_empty_window_rejected() {
    assert_eq!(calculate_stats(&[]), Err(StatsError::EmptyWindow));
    let full = vec![1.0; 30];
    assert_eq!(
        weighted_stats(&full, &[], &full, &WindowWeights::default()),
        Err(StatsError::EmptyWindow)
    );
}

#[test]
fn test_short_history_rejected() {
    let series = PriceSeries::new(vec![5.0; 45]);
    assert_eq!(
        weighted_series_stats(&series, &WindowWeights::default()),
        Err(StatsError::InsufficientHistory {
            required: 90,
            available: 45
        })
    );
}

#[test]
fn test_split_halves_averages_both_halves() {
    let mut closes = vec![10.0; 30];
    closes.extend(vec![20.0; 30]);
    let stats = split_halves_stats(&PriceSeries::new(closes)).unwrap();
    assert_close(stats.overall_avg, 15.0);
    assert_close(stats.lowest, 15.0);
    assert_close(stats.buy, 15.0 * 1.05);
    assert_close(stats.sell, 15.0 * 0.95);
}

#[test]
fn test_split_halves_needs_sixty_days() {
    let series = PriceSeries::new(vec![1.0; 59]);
    assert!(matches!(
        split_halves_stats(&series),
        Err(StatsError::InsufficientHistory { required: 60, .. })
    ));
}
