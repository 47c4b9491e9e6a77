use async_trait::async_trait;
use std::fmt;

use crate::cards::Card;
use crate::shared::AppError;

/// Opaque deck session identifier handed out by the deck service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeckId(String);

impl DeckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a single draw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnBatch {
    pub cards: Vec<Card>,
    /// Cards left in the deck after this draw, when the service reports it.
    pub remaining: Option<u32>,
}

/// Trait for deck service operations
#[async_trait]
pub trait DeckClient {
    async fn new_shuffled_deck(&self) -> Result<DeckId, AppError>;
    async fn draw(&self, deck_id: &DeckId, count: u32) -> Result<DrawnBatch, AppError>;
}
