//! Shared data models spanning the bot layers.

pub mod prices;
pub mod profile;
pub mod signal;
pub mod stats;

pub use prices::PriceSeries;
pub use profile::{ProfileDraft, ProfileFlow, ProfileInput, ProfileStage, SavedProfile};
pub use signal::Signal;
pub use stats::StatsRecord;
