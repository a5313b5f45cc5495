//! Window statistics and the weighted blend that produces a `StatsRecord`

use crate::error::StatsError;
use crate::models::{PriceSeries, StatsRecord};
use crate::signals::weights::{
    WindowWeights, LONG_WINDOW_DAYS, MEDIUM_WINDOW_DAYS, SHORT_WINDOW_DAYS,
};

/// Days needed for the split-halves summary
pub const SPLIT_HISTORY_DAYS: usize = 60;

/// Base statistics of a single window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub lowest: f64,
    pub avg_low: f64,
    pub overall_avg: f64,
    pub avg_high: f64,
    pub highest: f64,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the values strictly on one side of `pivot`, or `pivot` when none are
fn side_mean(values: &[f64], pivot: f64, above: bool) -> f64 {
    let side: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| if above { *v > pivot } else { *v < pivot })
        .collect();
    mean(&side).unwrap_or(pivot)
}

impl WindowStats {
    pub fn compute(window: &[f64]) -> Result<Self, StatsError> {
        let overall_avg = mean(window).ok_or(StatsError::EmptyWindow)?;
        let lowest = window.iter().copied().fold(f64::INFINITY, f64::min);
        let highest = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            lowest,
            avg_low: side_mean(window, overall_avg, false),
            overall_avg,
            avg_high: side_mean(window, overall_avg, true),
            highest,
        })
    }

    pub fn into_record(self) -> StatsRecord {
        StatsRecord::from_base(
            self.lowest,
            self.avg_low,
            self.overall_avg,
            self.avg_high,
            self.highest,
        )
    }
}

/// Statistics of one unweighted window
pub fn calculate_stats(prices: &[f64]) -> Result<StatsRecord, StatsError> {
    Ok(WindowStats::compute(prices)?.into_record())
}

/// Blend each statistic across three windows, then derive the levels
pub fn weighted_stats(
    short: &[f64],
    medium: &[f64],
    long: &[f64],
    weights: &WindowWeights,
) -> Result<StatsRecord, StatsError> {
    let s = WindowStats::compute(short)?;
    let m = WindowStats::compute(medium)?;
    let l = WindowStats::compute(long)?;
    let blend = |f: fn(&WindowStats) -> f64| weights.combine(f(&s), f(&m), f(&l));

    Ok(StatsRecord::from_base(
        blend(|w: &WindowStats| w.lowest),
        blend(|w: &WindowStats| w.avg_low),
        blend(|w: &WindowStats| w.overall_avg),
        blend(|w: &WindowStats| w.avg_high),
        blend(|w: &WindowStats| w.highest),
    ))
}

fn require(series: &PriceSeries, days: usize) -> Result<(), StatsError> {
    if series.len() < days {
        return Err(StatsError::InsufficientHistory {
            required: days,
            available: series.len(),
        });
    }
    Ok(())
}

/// Weighted 30/60/90-day record from a daily series of at least 90 closes
pub fn weighted_series_stats(
    series: &PriceSeries,
    weights: &WindowWeights,
) -> Result<StatsRecord, StatsError> {
    require(series, LONG_WINDOW_DAYS)?;
    let window = |days| {
        series.trailing(days).ok_or(StatsError::InsufficientHistory {
            required: days,
            available: series.len(),
        })
    };
    weighted_stats(
        window(SHORT_WINDOW_DAYS)?,
        window(MEDIUM_WINDOW_DAYS)?,
        window(LONG_WINDOW_DAYS)?,
        weights,
    )
}

/// Average of the first and last 30 days of the trailing 60
pub fn split_halves_stats(series: &PriceSeries) -> Result<StatsRecord, StatsError> {
    require(series, SPLIT_HISTORY_DAYS)?;
    let recent = series
        .trailing(SPLIT_HISTORY_DAYS)
        .ok_or(StatsError::EmptyWindow)?;
    let (first, last) = recent.split_at(SPLIT_HISTORY_DAYS / 2);
    let first = calculate_stats(first)?;
    let last = calculate_stats(last)?;
    Ok(first.midpoint(&last))
}
