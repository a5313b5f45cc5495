//! Price band heuristics: window statistics, weighting and classification.

pub mod calculator;
pub mod classification;
pub mod weights;

pub use calculator::*;
pub use classification::*;
pub use weights::*;
