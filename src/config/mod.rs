//! Environment-driven configuration
//!
//! `.env` is loaded by the binaries via `dotenvy` before any of these readers
//! run. Readers take a lookup function so tests can supply variables without
//! touching the process environment.

use std::time::Duration;

use crate::error::ConfigError;
use crate::services::binance::provider::MAX_KLINES;
use crate::signals::LONG_WINDOW_DAYS;

pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";
pub const DEFAULT_BINANCE_API_BASE: &str = "https://api.binance.com/api/v3";
pub const DEFAULT_HISTORY_DAYS: usize = LONG_WINDOW_DAYS;
pub const DEFAULT_BAND_PCT: f64 = 0.20;

/// Deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .ok_or(ConfigError::Missing(var))
}

fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw,
            reason: e.to_string(),
        }),
    }
}

/// Settings for the price source and the signal heuristic
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub binance_api_base: String,
    pub http_timeout: Duration,
    pub history_days: usize,
    pub band_pct: f64,
    pub wait_below_stop: bool,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            binance_api_base: DEFAULT_BINANCE_API_BASE.to_string(),
            http_timeout: Duration::from_secs(10),
            history_days: DEFAULT_HISTORY_DAYS,
            band_pct: DEFAULT_BAND_PCT,
            wait_below_stop: false,
        }
    }
}

impl MarketConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parsed(&lookup, "HTTP_TIMEOUT_SECONDS", 10)?;
        let history_days: usize = parsed(&lookup, "HISTORY_DAYS", DEFAULT_HISTORY_DAYS)?;
        // At least the longest weighted window, at most one klines page.
        if !(LONG_WINDOW_DAYS..=MAX_KLINES).contains(&history_days) {
            return Err(ConfigError::Invalid {
                var: "HISTORY_DAYS",
                value: history_days.to_string(),
                reason: format!("must be between {} and {}", LONG_WINDOW_DAYS, MAX_KLINES),
            });
        }
        let band_pct: f64 = parsed(&lookup, "SIGNAL_BAND_PCT", DEFAULT_BAND_PCT)?;
        if !(0.0..1.0).contains(&band_pct) {
            return Err(ConfigError::Invalid {
                var: "SIGNAL_BAND_PCT",
                value: band_pct.to_string(),
                reason: "must be in [0, 1)".to_string(),
            });
        }

        Ok(Self {
            binance_api_base: lookup("BINANCE_API_BASE")
                .unwrap_or_else(|| DEFAULT_BINANCE_API_BASE.to_string()),
            http_timeout: Duration::from_secs(timeout_secs.max(1)),
            history_days,
            band_pct,
            wait_below_stop: parsed(&lookup, "SIGNAL_WAIT_BELOW_STOP", false)?,
        })
    }
}

/// Credentials and endpoints for the Discord application
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub token: String,
    pub application_id: String,
    pub public_key: [u8; 32],
    pub guild_id: Option<u64>,
    pub api_base: String,
}

impl DiscordConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = required(&lookup, "DISCORD_TOKEN")?;
        let application_id = required(&lookup, "DISCORD_APPLICATION_ID")?;
        let raw_key = required(&lookup, "DISCORD_PUBLIC_KEY")?;
        let public_key = parse_public_key(&raw_key).map_err(|reason| ConfigError::Invalid {
            var: "DISCORD_PUBLIC_KEY",
            value: raw_key.clone(),
            reason,
        })?;
        let guild_id = match lookup("DISCORD_GUILD_ID") {
            None => None,
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "DISCORD_GUILD_ID",
                value: raw.clone(),
                reason: e.to_string(),
            })?),
        };

        Ok(Self {
            token,
            application_id,
            public_key,
            guild_id,
            api_base: lookup("DISCORD_API_BASE")
                .unwrap_or_else(|| DEFAULT_DISCORD_API_BASE.to_string()),
        })
    }
}

fn parse_public_key(raw: &str) -> Result<[u8; 32], String> {
    let bytes = hex::decode(raw.trim()).map_err(|e| e.to_string())?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("expected 32 bytes, got {}", b.len()))
}

/// Full bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub profile_timeout: Duration,
    pub discord: DiscordConfig,
    pub market: MarketConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile_timeout_secs: u64 = parsed(&lookup, "PROFILE_TIMEOUT_SECONDS", 60)?;
        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "sandbox".to_string()),
            port: parsed(&lookup, "PORT", 8080)?,
            profile_timeout: Duration::from_secs(profile_timeout_secs),
            discord: DiscordConfig::from_lookup(&lookup)?,
            market: MarketConfig::from_lookup(&lookup)?,
        })
    }
}
