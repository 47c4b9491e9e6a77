use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suitwatch::{
    AceOrder, AppError, DeckApiConfig, DeckClient, HttpDeckClient, InMemoryDeckClient, TokioClock,
    WatchConfig, WatchLoop, WatchOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "suitwatch", version)]
#[command(about = "Draw from a shuffled deck until a rank has appeared in every suit")]
struct Args {
    /// Rank to watch for: ACE, 2-10, JACK, QUEEN or KING (any case)
    rank: String,

    /// Cards to draw per poll
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Milliseconds between polls
    #[arg(short, long = "interval-ms", default_value_t = 1000)]
    interval_ms: u64,

    /// Sort ACE after KING instead of before 2
    #[arg(long)]
    ace_last: bool,

    /// Give up after this many draws
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_draws: Option<u64>,

    /// Report as soon as the last suit is found instead of waiting one more interval
    #[arg(long)]
    eager_finish: bool,

    /// Use a locally shuffled deck instead of the deck API
    #[arg(long)]
    offline: bool,
}

impl Args {
    fn watch_config(&self) -> WatchConfig {
        let mut config = WatchConfig::new(&self.rank)
            .with_cards_per_draw(self.count)
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_ace_order(AceOrder::from_ace_first(!self.ace_last))
            .with_eager_finish(self.eager_finish);
        if let Some(max_draws) = self.max_draws {
            config = config.with_max_draws(max_draws);
        }
        config
    }

    fn deck_client(&self) -> Result<Arc<dyn DeckClient + Send + Sync>, AppError> {
        if self.offline {
            return Ok(Arc::new(InMemoryDeckClient::new()));
        }
        let config = DeckApiConfig::new();
        info!(base_url = %config.base_url, "Using deck API");
        Ok(Arc::new(HttpDeckClient::new(&config)?))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suitwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let deck_client = match args.deck_client() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to set up deck client");
            return ExitCode::FAILURE;
        }
    };

    let watch_loop = WatchLoop::new(deck_client, Arc::new(TokioClock), args.watch_config());

    match watch_loop.run().await {
        Ok(WatchOutcome::Completed(report)) => {
            match serde_json::to_string_pretty(&report.drawn_cards) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, "Failed to render report");
                    ExitCode::FAILURE
                }
            }
        }
        Ok(WatchOutcome::Aborted { .. }) => {
            println!("Not a valid card value to watch for");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Watch failed");
            ExitCode::FAILURE
        }
    }
}
