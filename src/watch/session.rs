use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use crate::cards::{sort_ranks, AceOrder, Card, Rank, Suit};
use crate::deck::DeckId;

/// Ranks drawn so far, per suit, in draw order until the run finishes.
///
/// All four suits are always present so the report lists empty suits too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawnCards(BTreeMap<Suit, Vec<Rank>>);

impl Default for DrawnCards {
    fn default() -> Self {
        Self(Suit::iter().map(|suit| (suit, Vec::new())).collect())
    }
}

impl DrawnCards {
    pub fn get(&self, suit: Suit) -> &[Rank] {
        self.0.get(&suit).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suit, &[Rank])> {
        self.0.iter().map(|(suit, ranks)| (*suit, ranks.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    fn push(&mut self, card: &Card) {
        self.0.entry(card.suit).or_default().push(card.value);
    }

    fn sort_in_place(&mut self, order: AceOrder) {
        for ranks in self.0.values_mut() {
            *ranks = sort_ranks(ranks, order);
        }
    }
}

/// Which suits have produced the watched rank. Flags only ever go from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardWatch(BTreeMap<Suit, bool>);

impl Default for CardWatch {
    fn default() -> Self {
        Self(Suit::iter().map(|suit| (suit, false)).collect())
    }
}

impl CardWatch {
    pub fn is_seen(&self, suit: Suit) -> bool {
        self.0.get(&suit).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        Suit::iter().all(|suit| self.is_seen(suit))
    }

    pub fn missing(&self) -> Vec<Suit> {
        Suit::iter().filter(|suit| !self.is_seen(*suit)).collect()
    }

    fn mark(&mut self, suit: Suit) -> bool {
        let seen = self.0.entry(suit).or_insert(false);
        let newly_seen = !*seen;
        *seen = true;
        newly_seen
    }
}

/// State of one watch run against one deck
#[derive(Debug, Clone)]
pub struct WatchSession {
    deck_id: DeckId,
    watch_rank: Rank,
    drawn_cards: DrawnCards,
    card_watch: CardWatch,
    draws: u64,
}

impl WatchSession {
    pub fn new(deck_id: DeckId, watch_rank: Rank) -> Self {
        Self {
            deck_id,
            watch_rank,
            drawn_cards: DrawnCards::default(),
            card_watch: CardWatch::default(),
            draws: 0,
        }
    }

    pub fn deck_id(&self) -> &DeckId {
        &self.deck_id
    }

    pub fn watch_rank(&self) -> Rank {
        self.watch_rank
    }

    pub fn drawn_cards(&self) -> &DrawnCards {
        &self.drawn_cards
    }

    pub fn card_watch(&self) -> &CardWatch {
        &self.card_watch
    }

    /// Number of draw batches recorded
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn is_complete(&self) -> bool {
        self.card_watch.is_complete()
    }

    /// Records one draw batch. Returns the suits that saw the watched rank for the first time.
    pub fn record(&mut self, cards: &[Card]) -> Vec<Suit> {
        self.draws += 1;

        let mut newly_seen = Vec::new();
        for card in cards {
            if card.value == self.watch_rank && self.card_watch.mark(card.suit) {
                newly_seen.push(card.suit);
            }
            self.drawn_cards.push(card);
        }
        newly_seen
    }

    /// Sorts every suit and closes the session.
    pub fn finish(mut self, order: AceOrder) -> WatchReport {
        self.drawn_cards.sort_in_place(order);
        WatchReport {
            deck_id: self.deck_id,
            watch_rank: self.watch_rank,
            draws: self.draws,
            drawn_cards: self.drawn_cards,
        }
    }
}

/// Final result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchReport {
    pub deck_id: DeckId,
    pub watch_rank: Rank,
    pub draws: u64,
    pub drawn_cards: DrawnCards,
}
