//! `getcoin` and `summary`: fetch, compute, present

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::reply::{Reply, ReplyError, ReplySink};
use crate::config::MarketConfig;
use crate::error::{ReportError, StatsError};
use crate::models::{PriceSeries, Signal, StatsRecord};
use crate::presenter::{signal_embed, summary_embed};
use crate::services::market_data::MarketDataProvider;
use crate::signals::{
    split_halves_stats, weighted_series_stats, SignalPolicy, WindowWeights, LONG_WINDOW_DAYS,
    SPLIT_HISTORY_DAYS,
};

pub const FETCH_ERROR_MESSAGE: &str = "❌ Error fetching data. Make sure the coin exists on Binance and has enough historical data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinCommand {
    /// Weighted 30/60/90-day bands with a signal for the current price
    Weighted,
    /// 60-day stats averaged over its two 30-day halves
    Summary,
}

impl CoinCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CoinCommand::Weighted => crate::discord::commands::COMMAND_GETCOIN,
            CoinCommand::Summary => crate::discord::commands::COMMAND_SUMMARY,
        }
    }

    /// Closes the calculator needs; fewer takes the error path
    fn required_days(&self) -> usize {
        match self {
            CoinCommand::Weighted => LONG_WINDOW_DAYS,
            CoinCommand::Summary => SPLIT_HISTORY_DAYS,
        }
    }

    /// Closes requested from the provider
    fn fetch_limit(&self, market: &MarketConfig) -> usize {
        match self {
            CoinCommand::Weighted => market.history_days.max(LONG_WINDOW_DAYS),
            CoinCommand::Summary => SPLIT_HISTORY_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinReport {
    pub coin: String,
    pub stats: StatsRecord,
    /// Current price and its classification; absent for summaries
    pub signal: Option<(f64, Signal)>,
}

/// Whether the user saw a report or the error text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Report,
    Failed,
}

fn ensure_history(series: &PriceSeries, required: usize) -> Result<(), StatsError> {
    if series.len() < required {
        return Err(StatsError::InsufficientHistory {
            required,
            available: series.len(),
        });
    }
    Ok(())
}

/// Fetch prices and compute the report. The calculator only runs on a full history.
pub async fn build_report(
    command: CoinCommand,
    coin: &str,
    provider: &dyn MarketDataProvider,
    market: &MarketConfig,
) -> Result<CoinReport, ReportError> {
    let coin = coin.trim().to_uppercase();
    let required = command.required_days();
    let limit = command.fetch_limit(market);

    match command {
        CoinCommand::Weighted => {
            let (series, price) = tokio::try_join!(
                provider.daily_closes(&coin, limit),
                provider.latest_price(&coin)
            )?;
            ensure_history(&series, required)?;
            let stats = weighted_series_stats(&series, &WindowWeights::default())?;
            let policy = SignalPolicy {
                band_pct: market.band_pct,
                wait_below_stop: market.wait_below_stop,
            };
            let signal = policy.classify(&stats, price);
            Ok(CoinReport {
                coin,
                stats,
                signal: Some((price, signal)),
            })
        }
        CoinCommand::Summary => {
            let series = provider.daily_closes(&coin, limit).await?;
            ensure_history(&series, required)?;
            let stats = split_halves_stats(&series)?;
            Ok(CoinReport {
                coin,
                stats,
                signal: None,
            })
        }
    }
}

impl CoinReport {
    /// Embed reply stamped with the time the report was built
    pub fn into_reply(self, source: &str, at: DateTime<Utc>) -> Reply {
        let embed = match self.signal {
            Some((price, signal)) => signal_embed(&self.coin, signal, price, &self.stats, source),
            None => summary_embed(&self.coin, &self.stats, source),
        };
        Reply::Embed(embed.timestamp(at))
    }
}

/// Run a coin command end to end and deliver exactly one reply
pub async fn execute(
    command: CoinCommand,
    coin: &str,
    provider: &dyn MarketDataProvider,
    market: &MarketConfig,
    sink: &dyn ReplySink,
) -> Result<Outcome, ReplyError> {
    match build_report(command, coin, provider, market).await {
        Ok(report) => {
            info!(
                command = command.name(),
                coin = %report.coin,
                signal = ?report.signal.map(|(_, s)| s),
                "Report ready"
            );
            sink.deliver(report.into_reply(provider.source_name(), Utc::now())).await?;
            Ok(Outcome::Report)
        }
        Err(e) => {
            warn!(command = command.name(), coin = %coin, error = %e, "No data for coin");
            sink.deliver(Reply::Text(FETCH_ERROR_MESSAGE.to_string())).await?;
            Ok(Outcome::Failed)
        }
    }
}
