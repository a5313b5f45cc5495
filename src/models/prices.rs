use serde::{Deserialize, Serialize};

/// Daily closing prices, oldest first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(closes: Vec<f64>) -> Self {
        Self { closes }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Most recent close
    pub fn latest(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// The last `days` closes, or `None` when the history is shorter
    pub fn trailing(&self, days: usize) -> Option<&[f64]> {
        if days > self.closes.len() {
            return None;
        }
        Some(&self.closes[self.closes.len() - days..])
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(closes: Vec<f64>) -> Self {
        Self::new(closes)
    }
}
