//! Coinsignal Discord bot
//!
//! Registers the slash commands, then serves the interactions endpoint until
//! Ctrl-C.

use coinsignal::config::Config;
use coinsignal::core::http::start_server;
use coinsignal::core::{AppContext, ProfileSessions, SessionSweeper};
use coinsignal::discord::{commands, DiscordClient, InteractionVerifier};
use coinsignal::logging;
use coinsignal::metrics::Metrics;
use coinsignal::services::market_data::MarketDataProvider;
use coinsignal::services::BinanceMarketDataProvider;
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging(false);

    let config = Config::from_env()?;
    info!("Starting coinsignal bot");
    info!(environment = %config.environment, "Environment");

    let metrics = Arc::new(Metrics::new()?);

    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(BinanceMarketDataProvider::new(&config.market)?);
    let http = reqwest::Client::builder()
        .timeout(config.market.http_timeout)
        .build()?;
    let discord = DiscordClient::new(&config.discord, http);
    let verifier = InteractionVerifier::new(&config.discord.public_key)?;

    if let Err(e) = discord
        .register_commands(config.discord.guild_id, &commands::definitions())
        .await
    {
        // The endpoint still answers commands registered earlier.
        error!(error = %e, "Failed to sync slash commands");
    }

    let sessions = Arc::new(ProfileSessions::new(config.profile_timeout));
    info!(timeout_secs = sessions.ttl().as_secs(), "Profile dialog sessions enabled");
    let sweeper = SessionSweeper::new(sessions.clone(), Duration::from_secs(15))
        .with_metrics(metrics.clone());
    sweeper.start().await;

    let ctx = AppContext::new(
        config.market.clone(),
        provider,
        discord,
        verifier,
        sessions,
        metrics,
    );

    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(ctx, port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }
    sweeper.stop().await;

    Ok(())
}
