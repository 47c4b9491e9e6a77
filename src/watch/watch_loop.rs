use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::clock::Clock;
use super::config::WatchConfig;
use super::session::{WatchReport, WatchSession};
use crate::cards::Rank;
use crate::deck::DeckClient;
use crate::shared::AppError;

/// Where a run currently stands
#[derive(Debug)]
pub enum WatchState {
    Initializing,
    Polling(WatchSession),
    Done(WatchReport),
    Aborted(String),
}

impl WatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WatchState::Done(_) | WatchState::Aborted(_))
    }
}

/// How a run ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    Completed(WatchReport),
    /// The watch rank was rejected before any deck call was made
    Aborted { reason: String },
}

/// Draws from a fresh deck until the watched rank has shown up in every suit
pub struct WatchLoop {
    deck_client: Arc<dyn DeckClient + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
    config: WatchConfig,
}

impl WatchLoop {
    pub fn new(
        deck_client: Arc<dyn DeckClient + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
        config: WatchConfig,
    ) -> Self {
        Self {
            deck_client,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Runs the state machine until it reaches `Done` or `Aborted`.
    ///
    /// Deck or decode failures end the run with an error and discard
    /// everything drawn so far.
    #[instrument(skip(self), fields(watch_rank = %self.config.watch_rank))]
    pub async fn run(&self) -> Result<WatchOutcome, AppError> {
        let mut state = WatchState::Initializing;
        loop {
            state = match self.step(state).await? {
                WatchState::Done(report) => return Ok(WatchOutcome::Completed(report)),
                WatchState::Aborted(reason) => return Ok(WatchOutcome::Aborted { reason }),
                next => next,
            };
        }
    }

    /// Advances the run by one transition.
    pub async fn step(&self, state: WatchState) -> Result<WatchState, AppError> {
        match state {
            WatchState::Initializing => self.initialize().await,
            WatchState::Polling(session) => self.poll(session).await,
            terminal => Ok(terminal),
        }
    }

    async fn initialize(&self) -> Result<WatchState, AppError> {
        let watch_rank = match Rank::try_from(self.config.watch_rank.as_str()) {
            Ok(rank) => rank,
            Err(_) => {
                let reason = AppError::InvalidRank(self.config.watch_rank.clone()).to_string();
                warn!(watch_rank = %self.config.watch_rank, "Aborting watch: invalid rank");
                return Ok(WatchState::Aborted(reason));
            }
        };
        self.config.validate()?;

        let deck_id = self.deck_client.new_shuffled_deck().await?;
        info!(
            deck_id = %deck_id,
            watch_rank = %watch_rank,
            cards_per_draw = self.config.cards_per_draw,
            interval = ?self.config.interval,
            "Watching new deck"
        );

        Ok(WatchState::Polling(WatchSession::new(deck_id, watch_rank)))
    }

    async fn poll(&self, mut session: WatchSession) -> Result<WatchState, AppError> {
        // Completion is checked before drawing, never right after a draw
        if session.is_complete() {
            let report = session.finish(self.config.ace_order);
            info!(
                deck_id = %report.deck_id,
                draws = report.draws,
                cards_drawn = report.drawn_cards.total(),
                "Watched rank seen in every suit"
            );
            return Ok(WatchState::Done(report));
        }

        let batch = self
            .deck_client
            .draw(session.deck_id(), self.config.cards_per_draw)
            .await?;
        let newly_seen = session.record(&batch.cards);

        debug!(
            deck_id = %session.deck_id(),
            drawn = batch.cards.len(),
            remaining = ?batch.remaining,
            "Processed draw"
        );
        for suit in newly_seen {
            info!(suit = %suit, watch_rank = %session.watch_rank(), "Watched rank found");
        }

        // An unreported `remaining` never counts as exhaustion
        if !session.is_complete() && (batch.cards.is_empty() || batch.remaining == Some(0)) {
            warn!(
                deck_id = %session.deck_id(),
                missing = ?session.card_watch().missing(),
                "Deck exhausted"
            );
            return Err(AppError::DeckExhausted {
                deck_id: session.deck_id().to_string(),
                cards_drawn: session.drawn_cards().total(),
            });
        }

        if let Some(max_draws) = self.config.max_draws {
            if !session.is_complete() && session.draws() >= max_draws {
                warn!(
                    deck_id = %session.deck_id(),
                    max_draws,
                    missing = ?session.card_watch().missing(),
                    "Draw limit reached"
                );
                return Err(AppError::DrawLimitReached(max_draws));
            }
        }

        if !(self.config.eager_finish && session.is_complete()) {
            self.clock.sleep(self.config.interval).await;
        }

        Ok(WatchState::Polling(session))
    }
}
