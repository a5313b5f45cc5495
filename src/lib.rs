//! Discord bot that turns daily exchange closes into buy/sell/stop price bands.

pub mod commands;
pub mod config;
pub mod core;
pub mod discord;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod presenter;
pub mod services;
pub mod signals;
