use std::time::Duration;

use crate::cards::AceOrder;
use crate::shared::AppError;

/// Parameters for a single watch run
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Rank to wait for in every suit, as typed by the caller. Validated when the run starts.
    pub watch_rank: String,
    /// How many cards to draw per poll
    pub cards_per_draw: u32,
    /// Delay between polls
    pub interval: Duration,
    /// How to order ranks in the final report
    pub ace_order: AceOrder,
    /// Give up after this many draw calls
    pub max_draws: Option<u64>,
    /// Finish as soon as the draw that completes the watch is processed,
    /// instead of after one more interval
    pub eager_finish: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            watch_rank: "QUEEN".to_string(),
            cards_per_draw: 2,
            interval: Duration::from_millis(1000),
            ace_order: AceOrder::First,
            max_draws: None,
            eager_finish: false,
        }
    }
}

impl WatchConfig {
    pub fn new(watch_rank: impl ToString) -> Self {
        Self {
            watch_rank: watch_rank.to_string(),
            ..Self::default()
        }
    }

    pub fn with_cards_per_draw(mut self, cards_per_draw: u32) -> Self {
        self.cards_per_draw = cards_per_draw;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_ace_order(mut self, ace_order: AceOrder) -> Self {
        self.ace_order = ace_order;
        self
    }

    pub fn with_max_draws(mut self, max_draws: u64) -> Self {
        self.max_draws = Some(max_draws);
        self
    }

    pub fn with_eager_finish(mut self, eager_finish: bool) -> Self {
        self.eager_finish = eager_finish;
        self
    }

    /// Checks the numeric parameters. The watch rank is checked separately
    /// since an invalid rank aborts the run rather than failing it.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.cards_per_draw == 0 {
            return Err(AppError::Config(
                "cards per draw must be at least 1".to_string(),
            ));
        }
        if self.max_draws == Some(0) {
            return Err(AppError::Config("max draws must be at least 1".to_string()));
        }
        Ok(())
    }
}
