//! Application context built once at startup and shared by every handler

use std::sync::Arc;
use std::time::Instant;

use crate::config::MarketConfig;
use crate::core::sessions::ProfileSessions;
use crate::discord::{DiscordClient, InteractionVerifier};
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;

#[derive(Clone)]
pub struct AppContext {
    pub market: Arc<MarketConfig>,
    pub provider: Arc<dyn MarketDataProvider>,
    pub discord: DiscordClient,
    pub verifier: Arc<InteractionVerifier>,
    pub sessions: Arc<ProfileSessions>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

impl AppContext {
    pub fn new(
        market: MarketConfig,
        provider: Arc<dyn MarketDataProvider>,
        discord: DiscordClient,
        verifier: InteractionVerifier,
        sessions: Arc<ProfileSessions>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            market: Arc::new(market),
            provider,
            discord,
            verifier: Arc::new(verifier),
            sessions,
            metrics,
            start_time: Arc::new(Instant::now()),
        }
    }
}
