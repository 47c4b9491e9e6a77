// Public API
pub use client::{DeckClient, DeckId, DrawnBatch};
pub use config::DeckApiConfig;
pub use http::HttpDeckClient;
pub use memory::InMemoryDeckClient;

// Internal modules
mod client;
mod config;
mod http;
mod memory;
mod models;
