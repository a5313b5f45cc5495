//! Command pipelines shared by the Discord and console front ends.

pub mod coin;
pub mod profile;
pub mod reply;

pub use coin::{CoinCommand, CoinReport, Outcome};
pub use reply::{ConsoleReply, InteractionFollowup, Reply, ReplySink};
