use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical recommendation for the current price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    /// Price broke below the stop level; only produced when the stop guard is on
    Wait,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
            Signal::Wait => "WAIT",
        }
    }

    /// Embed accent colour
    pub fn color(&self) -> u32 {
        match self {
            Signal::Buy => 0x2ecc71,
            Signal::Sell => 0xe74c3c,
            Signal::Hold => 0xf1c40f,
            Signal::Wait => 0x95a5a6,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
