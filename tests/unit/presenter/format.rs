//! Unit tests for display formatting

use coinsignal::models::{Signal, StatsRecord};
use coinsignal::presenter::{
    display_range, format_price, format_range, range_delta, render_text, round_to, signal_embed,
    summary_embed, SUMMARY_COLOR,
};

fn sample_stats() -> StatsRecord {
    StatsRecord::from_base(90.0, 95.0, 100.0, 105.0, 110.0)
}

#[test]
fn test_round_to_two_places() {
    assert_eq!(round_to(1.234, 2), 1.23);
    assert_eq!(round_to(1.236, 2), 1.24);
    assert_eq!(round_to(-4.5678, 1), -4.6);
}

#[test]
fn test_small_values_get_fixed_delta() {
    assert_eq!(range_delta(0.5), 0.1);
    assert_eq!(range_delta(9.99), 0.1);
}

#[test]
fn test_large_values_scale_delta() {
    assert!((range_delta(200.0) - 2.0).abs() < 1e-12);
    assert!((range_delta(50_000.0) - 500.0).abs() < 1e-9);
}

#[test]
fn test_range_is_clamped_at_zero() {
    assert_eq!(display_range(0.05), (0.0, 0.15));
}

#[test]
fn test_format_range_and_price() {
    assert_eq!(format_range(100.0), "$99.00 – $101.00");
    assert_eq!(format_range(5.0), "$4.90 – $5.10");
    assert_eq!(format_price(1234.5678), "$1234.57");
}

#[test]
fn test_signal_embed_layout() {
    let embed = signal_embed("btc", Signal::Buy, 100.0, &sample_stats(), "Binance");
    assert_eq!(embed.title, "BTC · BUY @ $100.00");
    assert_eq!(embed.color, Some(Signal::Buy.color()));
    assert_eq!(embed.fields.len(), 2);
    assert_eq!(embed.fields[0].name, "📊 Prices");
    assert!(embed.fields[0].value.starts_with("Lowest: $89.10 – $90.90"));
    assert_eq!(embed.fields[1].name, "💰 Signals");
    assert!(embed.fields[1].value.contains("Stop: $89.10 – $90.90"));
    assert!(embed
        .footer
        .as_ref()
        .map(|f| f.text.contains("Binance"))
        .unwrap_or(false));
}

#[test]
fn test_summary_embed_shows_point_values() {
    let embed = summary_embed("eth", &sample_stats(), "Binance");
    assert_eq!(embed.title, "ETH - 60 Day Combined Summary");
    assert_eq!(embed.color, Some(SUMMARY_COLOR));
    assert_eq!(
        embed.fields[0].value,
        "Lowest: $95.00 | Average: $100.00 | Highest: $105.00"
    );
}

#[test]
fn test_render_text_lists_fields() {
    let embed = summary_embed("eth", &sample_stats(), "Binance");
    let text = render_text(&embed);
    assert!(text.starts_with("ETH - 60 Day Combined Summary\n📊 Prices\n  Lowest: $95.00"));
    assert!(text.contains("\n  Feed: $"));
    assert!(text.ends_with("combined first & last 30 days of 60"));
}
