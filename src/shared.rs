use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not a valid card value to watch for: {0}")]
    InvalidRank(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Deck API error: {0}")]
    Api(String),

    #[error("Deck API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Deck {deck_id} exhausted after {cards_drawn} cards without finding the watched rank in every suit")]
    DeckExhausted { deck_id: String, cards_drawn: usize },

    #[error("Draw limit of {0} reached before the watched rank appeared in every suit")]
    DrawLimitReached(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AppError {
    fn from(e: url::ParseError) -> Self {
        AppError::Config(format!("invalid URL: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}
