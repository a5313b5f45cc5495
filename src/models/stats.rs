use serde::{Deserialize, Serialize};

/// Statistics and trading levels derived from one or more price windows.
///
/// Every field is derived; a record is rebuilt from scratch on each request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub lowest: f64,
    pub avg_low: f64,
    pub overall_avg: f64,
    pub avg_high: f64,
    pub highest: f64,
    pub buy: f64,
    pub sell: f64,
    pub stop: f64,
    pub feed: f64,
}

impl StatsRecord {
    pub const BUY_FACTOR: f64 = 1.05;
    pub const SELL_FACTOR: f64 = 0.95;

    /// Build a record from the five base statistics, deriving the levels
    pub fn from_base(lowest: f64, avg_low: f64, overall_avg: f64, avg_high: f64, highest: f64) -> Self {
        let buy = avg_low * Self::BUY_FACTOR;
        let sell = avg_high * Self::SELL_FACTOR;
        let stop = lowest;
        Self {
            lowest,
            avg_low,
            overall_avg,
            avg_high,
            highest,
            buy,
            sell,
            stop,
            feed: (buy + stop) / 2.0,
        }
    }

    /// Field-wise mean of two records
    pub fn midpoint(&self, other: &StatsRecord) -> StatsRecord {
        let mid = |a: f64, b: f64| (a + b) / 2.0;
        StatsRecord {
            lowest: mid(self.lowest, other.lowest),
            avg_low: mid(self.avg_low, other.avg_low),
            overall_avg: mid(self.overall_avg, other.overall_avg),
            avg_high: mid(self.avg_high, other.avg_high),
            highest: mid(self.highest, other.highest),
            buy: mid(self.buy, other.buy),
            sell: mid(self.sell, other.sell),
            stop: mid(self.stop, other.stop),
            feed: mid(self.feed, other.feed),
        }
    }
}
