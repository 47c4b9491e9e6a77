#![allow(dead_code)] // Test utilities may not all be used in every test

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use suitwatch::{AppError, Card, Clock, DeckClient, DeckId, DrawnBatch};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Everything the watch loop asked of its collaborators, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewDeck,
    Draw { deck_id: String, count: u32 },
    Sleep(Duration),
}

#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, call: Call) {
        self.calls.write().await.push(call);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn new_deck_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, Call::NewDeck))
            .count()
    }

    pub async fn draw_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .count()
    }

    pub async fn sleep_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, Call::Sleep(_)))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.calls.read().await.is_empty()
    }
}

/// A scripted step returned by `ScriptedDeckClient::draw`
pub enum ScriptedDraw {
    Batch(DrawnBatch),
    Fail(String),
}

/// Deck client that replays a fixed script of draws
///
/// Once the script runs out it keeps returning the filler batch, if any,
/// or an empty batch with no cards remaining.
pub struct ScriptedDeckClient {
    log: CallLog,
    deck_id: String,
    script: RwLock<VecDeque<ScriptedDraw>>,
    filler: Option<DrawnBatch>,
    fail_new_deck: bool,
}

impl ScriptedDeckClient {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            deck_id: "scripted-deck".to_string(),
            script: RwLock::new(VecDeque::new()),
            filler: None,
            fail_new_deck: false,
        }
    }

    /// Queues the given batches; `remaining` counts down from a full deck.
    pub fn with_batches(mut self, batches: Vec<Vec<Card>>) -> Self {
        let mut remaining = 52u32;
        for cards in batches {
            remaining = remaining.saturating_sub(cards.len() as u32);
            self.script
                .get_mut()
                .push_back(ScriptedDraw::Batch(DrawnBatch {
                    cards,
                    remaining: Some(remaining),
                }));
        }
        self
    }

    pub fn with_step(mut self, step: ScriptedDraw) -> Self {
        self.script.get_mut().push_back(step);
        self
    }

    /// `remaining: None` mimics a service that does not report the deck size.
    pub fn with_filler(mut self, cards: Vec<Card>, remaining: Option<u32>) -> Self {
        self.filler = Some(DrawnBatch { cards, remaining });
        self
    }

    pub fn failing_new_deck(mut self) -> Self {
        self.fail_new_deck = true;
        self
    }
}

#[async_trait]
impl DeckClient for ScriptedDeckClient {
    async fn new_shuffled_deck(&self) -> Result<DeckId, AppError> {
        self.log.push(Call::NewDeck).await;
        if self.fail_new_deck {
            return Err(AppError::Api("scripted deck creation failure".to_string()));
        }
        Ok(DeckId::new(self.deck_id.clone()))
    }

    async fn draw(&self, deck_id: &DeckId, count: u32) -> Result<DrawnBatch, AppError> {
        self.log
            .push(Call::Draw {
                deck_id: deck_id.to_string(),
                count,
            })
            .await;

        match self.script.write().await.pop_front() {
            Some(ScriptedDraw::Batch(batch)) => Ok(batch),
            Some(ScriptedDraw::Fail(message)) => Err(AppError::Api(message)),
            None => Ok(self.filler.clone().unwrap_or(DrawnBatch {
                cards: Vec::new(),
                remaining: Some(0),
            })),
        }
    }
}

/// Clock that records requested delays and returns immediately
#[derive(Clone)]
pub struct RecordingClock {
    log: CallLog,
}

impl RecordingClock {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

#[async_trait]
impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.log.push(Call::Sleep(duration)).await;
    }
}
