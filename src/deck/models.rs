use serde::Deserialize;

use crate::cards::Card;

fn default_success() -> bool {
    true
}

/// Body of `GET deck/new/shuffle/`
///
/// Only `deck_id` is required; a missing `success` counts as success.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDeckResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub deck_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET deck/{deck_id}/draw/?count=N`
///
/// When fewer cards remain than requested the service reports
/// `success: false` but still returns what it could draw. Only `cards`
/// is required.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub cards: Option<Vec<Card>>,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}
