use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/";

/// Configuration for the HTTP deck service
#[derive(Debug, Clone)]
pub struct DeckApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl DeckApiConfig {
    pub fn new() -> Self {
        let request_timeout_secs = std::env::var("DECK_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Self {
            base_url: std::env::var("DECK_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for DeckApiConfig {
    fn default() -> Self {
        Self::new()
    }
}
