//! Window weights for the 30/60/90-day blend

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

pub const SHORT_WINDOW_DAYS: usize = 30;
pub const MEDIUM_WINDOW_DAYS: usize = 60;
pub const LONG_WINDOW_DAYS: usize = 90;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowWeights {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl Default for WindowWeights {
    fn default() -> Self {
        Self {
            short: 0.55,
            medium: 0.30,
            long: 0.15,
        }
    }
}

impl WindowWeights {
    pub fn new(short: f64, medium: f64, long: f64) -> Result<Self, StatsError> {
        if short < 0.0 || medium < 0.0 || long < 0.0 {
            return Err(StatsError::InvalidWeights(
                "all weights must be non-negative".to_string(),
            ));
        }
        let total = short + medium + long;
        if (total - 1.0).abs() > 0.001 {
            return Err(StatsError::InvalidWeights(format!(
                "weights must sum to 1.0, got {}",
                total
            )));
        }
        Ok(Self {
            short,
            medium,
            long,
        })
    }

    /// Blend one statistic computed on each window
    pub fn combine(&self, short: f64, medium: f64, long: f64) -> f64 {
        self.short * short + self.medium * medium + self.long * long
    }

    pub fn total(&self) -> f64 {
        self.short + self.medium + self.long
    }
}
