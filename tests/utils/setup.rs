#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;
use std::time::Duration;

use suitwatch::{AceOrder, Card, Rank, Suit, WatchConfig, WatchLoop};

use super::mocks::{CallLog, RecordingClock, ScriptedDeckClient, ScriptedDraw};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct WatchSetup {
    pub watch_loop: WatchLoop,
    pub log: CallLog,
}

pub struct WatchSetupBuilder {
    config: WatchConfig,
    batches: Vec<Vec<Card>>,
    steps: Vec<ScriptedDraw>,
    filler: Option<(Vec<Card>, Option<u32>)>,
    fail_new_deck: bool,
}

impl WatchSetupBuilder {
    pub fn new(watch_rank: &str) -> Self {
        Self {
            config: WatchConfig::new(watch_rank).with_interval(Duration::from_millis(1000)),
            batches: vec![],
            steps: vec![],
            filler: None,
            fail_new_deck: false,
        }
    }

    pub fn with_config(mut self, edit: impl FnOnce(WatchConfig) -> WatchConfig) -> Self {
        self.config = edit(self.config);
        self
    }

    pub fn with_ace_order(self, order: AceOrder) -> Self {
        self.with_config(|c| c.with_ace_order(order))
    }

    pub fn with_batch(mut self, cards: Vec<Card>) -> Self {
        self.batches.push(cards);
        self
    }

    /// Appended after all batches
    pub fn with_failure(mut self, message: &str) -> Self {
        self.steps.push(ScriptedDraw::Fail(message.to_string()));
        self
    }

    pub fn with_filler(mut self, cards: Vec<Card>, remaining: Option<u32>) -> Self {
        self.filler = Some((cards, remaining));
        self
    }

    pub fn failing_new_deck(mut self) -> Self {
        self.fail_new_deck = true;
        self
    }

    pub fn build(self) -> WatchSetup {
        let log = CallLog::new();

        let mut client = ScriptedDeckClient::new(log.clone()).with_batches(self.batches);
        for step in self.steps {
            client = client.with_step(step);
        }
        if let Some((cards, remaining)) = self.filler {
            client = client.with_filler(cards, remaining);
        }
        if self.fail_new_deck {
            client = client.failing_new_deck();
        }

        let watch_loop = WatchLoop::new(
            Arc::new(client),
            Arc::new(RecordingClock::new(log.clone())),
            self.config,
        );

        WatchSetup { watch_loop, log }
    }
}

// ============================================================================
// Card helpers
// ============================================================================

pub fn card(value: Rank, suit: Suit) -> Card {
    Card::new(value, suit)
}

/// One card of `rank` in every suit, hearts first
pub fn rank_in_every_suit(rank: Rank) -> Vec<Card> {
    vec![
        card(rank, Suit::Hearts),
        card(rank, Suit::Spades),
        card(rank, Suit::Diamonds),
        card(rank, Suit::Clubs),
    ]
}
