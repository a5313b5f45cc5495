//! Core application primitives (context, server, interaction dispatch)

pub mod context;
pub mod http;
pub mod interactions;
pub mod sessions;

pub use context::AppContext;
pub use http::*;
pub use sessions::{ProfileSessions, SessionSweeper};
