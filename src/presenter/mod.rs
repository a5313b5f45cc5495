//! Display formatting for computed stats

use crate::discord::Embed;
use crate::models::{Signal, StatsRecord};

pub const DISPLAY_DECIMALS: i32 = 2;

/// Discord green; summaries carry no signal
pub const SUMMARY_COLOR: u32 = 0x2ecc71;

/// Values below this get a fixed range delta
const SMALL_VALUE: f64 = 10.0;
const SMALL_VALUE_DELTA: f64 = 0.1;
const RANGE_PCT: f64 = 0.01;

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Half-width of the range shown around `value`
pub fn range_delta(value: f64) -> f64 {
    if value.abs() < SMALL_VALUE {
        SMALL_VALUE_DELTA
    } else {
        value.abs() * RANGE_PCT
    }
}

/// `value ± delta`, rounded, with the low end clamped at zero
pub fn display_range(value: f64) -> (f64, f64) {
    let delta = range_delta(value);
    (
        round_to((value - delta).max(0.0), DISPLAY_DECIMALS),
        round_to(value + delta, DISPLAY_DECIMALS),
    )
}

pub fn format_price(value: f64) -> String {
    format!("${:.2}", round_to(value, DISPLAY_DECIMALS))
}

pub fn format_range(value: f64) -> String {
    let (low, high) = display_range(value);
    format!("${:.2} – ${:.2}", low, high)
}

/// Embed for the weighted 30/60/90-day view
pub fn signal_embed(
    coin: &str,
    signal: Signal,
    price: f64,
    stats: &StatsRecord,
    source: &str,
) -> Embed {
    Embed::new(format!(
        "{} · {} @ {}",
        coin.to_uppercase(),
        signal,
        format_price(price)
    ))
    .color(signal.color())
    .field(
        "📊 Prices",
        format!(
            "Lowest: {} | Average: {} | Highest: {}",
            format_range(stats.lowest),
            format_range(stats.overall_avg),
            format_range(stats.highest)
        ),
    )
    .field(
        "💰 Signals",
        format!(
            "Buy: {} | Sell: {} | Stop: {} | Feed: {}",
            format_range(stats.buy),
            format_range(stats.sell),
            format_range(stats.stop),
            format_price(stats.feed)
        ),
    )
    .footer(format!("Data from {} - weighted 30/60/90 days", source))
}

/// Embed for the 60-day split-halves summary
pub fn summary_embed(coin: &str, stats: &StatsRecord, source: &str) -> Embed {
    Embed::new(format!("{} - 60 Day Combined Summary", coin.to_uppercase()))
        .color(SUMMARY_COLOR)
        .field(
            "📊 Prices",
            format!(
                "Lowest: {} | Average: {} | Highest: {}",
                format_price(stats.avg_low),
                format_price(stats.overall_avg),
                format_price(stats.avg_high)
            ),
        )
        .field(
            "💰 Signals",
            format!(
                "Buy: {} | Sell: {} | Stop: {} | Feed: {}",
                format_price(stats.buy),
                format_price(stats.sell),
                format_price(stats.stop),
                format_price(stats.feed)
            ),
        )
        .footer(format!(
            "Data from {} - combined first & last 30 days of 60",
            source
        ))
}

/// Plain-text rendering for terminals
pub fn render_text(embed: &Embed) -> String {
    let mut out = embed.title.clone();
    for field in &embed.fields {
        out.push_str(&format!("\n{}\n  {}", field.name, field.value.replace(" | ", "\n  ")));
    }
    if let Some(footer) = &embed.footer {
        out.push_str(&format!("\n{}", footer.text));
    }
    out
}
