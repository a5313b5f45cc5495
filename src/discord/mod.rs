//! Discord HTTP interactions: payload models, request verification and REST client.

pub mod client;
pub mod commands;
pub mod model;
pub mod verify;

pub use client::DiscordClient;
pub use model::*;
pub use verify::InteractionVerifier;
