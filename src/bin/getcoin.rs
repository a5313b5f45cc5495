//! Console front end: `getcoin <COIN> [--summary]`
//!
//! Runs the same pipeline as the slash commands and prints the reply.

use coinsignal::commands::coin::{self, CoinCommand, Outcome};
use coinsignal::commands::ConsoleReply;
use coinsignal::config::MarketConfig;
use coinsignal::logging;
use coinsignal::services::BinanceMarketDataProvider;
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging(true);

    let mut coin = None;
    let mut command = CoinCommand::Weighted;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--summary" => command = CoinCommand::Summary,
            _ => coin = Some(arg),
        }
    }
    let coin = coin.ok_or("usage: getcoin <COIN> [--summary]")?;

    let market = MarketConfig::from_env()?;
    let provider = BinanceMarketDataProvider::new(&market)?;
    let sink = ConsoleReply::stdout();

    match coin::execute(command, &coin, &provider, &market, &sink).await? {
        Outcome::Report => Ok(()),
        Outcome::Failed => std::process::exit(1),
    }
}
