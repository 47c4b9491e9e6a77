use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::client::{DeckClient, DeckId, DrawnBatch};
use super::config::DeckApiConfig;
use super::models::{DrawResponse, NewDeckResponse};
use crate::shared::AppError;

/// Deck client backed by the public deck-of-cards HTTP API
pub struct HttpDeckClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpDeckClient {
    pub fn new(config: &DeckApiConfig) -> Result<Self, AppError> {
        let mut base_url = Url::parse(&config.base_url)?;
        match base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(AppError::Config(format!(
                    "unsupported URL scheme {other} (expected http or https)"
                )))
            }
        }
        // Url::join drops the last path segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn new_deck_url(&self) -> Result<Url, AppError> {
        Ok(self.base_url.join("deck/new/shuffle/")?)
    }

    fn draw_url(&self, deck_id: &DeckId, count: u32) -> Result<Url, AppError> {
        let mut url = self.base_url.join(&format!("deck/{}/draw/", deck_id))?;
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        debug!(url = %url, "Sending deck API request");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Deck API request failed");
            return Err(AppError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl DeckClient for HttpDeckClient {
    #[instrument(skip(self))]
    async fn new_shuffled_deck(&self) -> Result<DeckId, AppError> {
        let body: NewDeckResponse = self.get_json(self.new_deck_url()?).await?;

        match body.deck_id {
            Some(deck_id) if body.success => {
                debug!(deck_id = %deck_id, "Shuffled new deck");
                Ok(DeckId::new(deck_id))
            }
            _ if !body.success => Err(AppError::Api(
                body.error
                    .unwrap_or_else(|| "deck creation was not successful".to_string()),
            )),
            _ => Err(AppError::Decode("response is missing deck_id".to_string())),
        }
    }

    #[instrument(skip(self))]
    async fn draw(&self, deck_id: &DeckId, count: u32) -> Result<DrawnBatch, AppError> {
        let body: DrawResponse = self.get_json(self.draw_url(deck_id, count)?).await?;

        match body.cards {
            Some(cards) => {
                if !body.success {
                    debug!(
                        deck_id = %deck_id,
                        error = body.error.as_deref().unwrap_or_default(),
                        drawn = cards.len(),
                        "Partial draw"
                    );
                }
                Ok(DrawnBatch {
                    cards,
                    remaining: body.remaining,
                })
            }
            None if !body.success => Err(AppError::Api(
                body.error
                    .unwrap_or_else(|| "draw was not successful".to_string()),
            )),
            None => Err(AppError::Decode("response is missing cards".to_string())),
        }
    }
}
