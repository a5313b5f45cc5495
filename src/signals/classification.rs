//! Current-price classification against the computed levels

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BAND_PCT;
use crate::models::{Signal, StatsRecord};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalPolicy {
    /// Relative tolerance around the buy and sell levels
    pub band_pct: f64,
    /// Report `Wait` when the price is below the stop level
    pub wait_below_stop: bool,
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self {
            band_pct: DEFAULT_BAND_PCT,
            wait_below_stop: false,
        }
    }
}

/// Whether `price` lies within `level ± band_pct·level`
pub fn within_band(price: f64, level: f64, band_pct: f64) -> bool {
    (price - level).abs() <= (level * band_pct).abs()
}

/// BUY near the buy level, else SELL near the sell level, else HOLD.
///
/// The buy band is checked first, so a price inside both bands is a BUY.
pub fn classify(stats: &StatsRecord, price: f64, band_pct: f64) -> Signal {
    if within_band(price, stats.buy, band_pct) {
        Signal::Buy
    } else if within_band(price, stats.sell, band_pct) {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

impl SignalPolicy {
    pub fn classify(&self, stats: &StatsRecord, price: f64) -> Signal {
        if self.wait_below_stop && price < stats.stop {
            return Signal::Wait;
        }
        classify(stats, price, self.band_pct)
    }
}
