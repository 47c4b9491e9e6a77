use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::client::{DeckClient, DeckId, DrawnBatch};
use crate::cards::Card;
use crate::shared::AppError;

/// In-memory implementation of DeckClient for offline runs and testing
///
/// Every new deck is a standard 52-card deck shuffled locally. Decks are
/// kept until the client is dropped.
pub struct InMemoryDeckClient {
    /// A mapping from deck ID to the cards still in the deck, top card last
    decks: Arc<RwLock<HashMap<DeckId, Vec<Card>>>>,
}

impl Default for InMemoryDeckClient {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDeckClient {
    pub fn new() -> Self {
        Self {
            decks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns how many cards are left in a deck, if it exists
    pub async fn remaining(&self, deck_id: &DeckId) -> Option<usize> {
        self.decks.read().await.get(deck_id).map(Vec::len)
    }

    fn shuffled_deck() -> Vec<Card> {
        let mut cards = Card::all_cards();
        cards.shuffle(&mut rand::rng());
        cards
    }
}

#[async_trait]
impl DeckClient for InMemoryDeckClient {
    #[instrument(skip(self))]
    async fn new_shuffled_deck(&self) -> Result<DeckId, AppError> {
        let deck_id = DeckId::new(Uuid::new_v4().to_string());
        let cards = Self::shuffled_deck();

        self.decks.write().await.insert(deck_id.clone(), cards);

        debug!(deck_id = %deck_id, "Shuffled new deck in memory");
        Ok(deck_id)
    }

    #[instrument(skip(self))]
    async fn draw(&self, deck_id: &DeckId, count: u32) -> Result<DrawnBatch, AppError> {
        let mut decks = self.decks.write().await;
        let Some(cards) = decks.get_mut(deck_id) else {
            warn!(deck_id = %deck_id, "Deck not found in memory");
            return Err(AppError::DeckNotFound(deck_id.to_string()));
        };

        let take = (count as usize).min(cards.len());
        let split_at = cards.len() - take;
        let mut drawn = cards.split_off(split_at);
        drawn.reverse();

        Ok(DrawnBatch {
            cards: drawn,
            remaining: Some(cards.len() as u32),
        })
    }
}
