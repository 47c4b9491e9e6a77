// Library crate for the suit watcher
// This file exposes the public API for the binary and integration tests

pub mod cards;
pub mod deck;
pub mod shared;
pub mod watch;

// Re-export commonly used types for easier access in tests
pub use cards::{is_valid_rank, sort_ranks, AceOrder, Card, Rank, Suit};
pub use deck::{DeckApiConfig, DeckClient, DeckId, DrawnBatch, HttpDeckClient, InMemoryDeckClient};
pub use shared::AppError;
pub use watch::{
    Clock, DrawnCards, TokioClock, WatchConfig, WatchLoop, WatchOutcome, WatchReport, WatchState,
};
