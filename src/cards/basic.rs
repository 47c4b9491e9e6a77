use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The four suits, declared in the order results are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Hearts => "HEARTS",
                Suit::Spades => "SPADES",
                Suit::Diamonds => "DIAMONDS",
                Suit::Clubs => "CLUBS",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "HEARTS" => Ok(Suit::Hearts),
            "SPADES" => Ok(Suit::Spades),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "CLUBS" => Ok(Suit::Clubs),
            _ => Err(format!("unknown suit: {s}")),
        }
    }
}

impl TryFrom<String> for Suit {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Suit::try_from(s.as_str())
    }
}

/// Card face values. Labels match the deck API: `ACE`, `2`..`10`, `JACK`, `QUEEN`, `KING`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
#[serde(try_from = "String", into = "String")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let upper = s.to_uppercase();
        Rank::iter()
            .find(|rank| rank.label() == upper)
            .ok_or_else(|| format!("unknown rank: {s}"))
    }
}

impl TryFrom<String> for Rank {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rank::try_from(s.as_str())
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.label().to_string()
    }
}

/// Checks a candidate watch rank against the thirteen known ranks.
///
/// Accepts anything printable so numeric ranks can be passed as integers;
/// the comparison is made on the uppercased string form.
pub fn is_valid_rank(input: impl fmt::Display) -> bool {
    Rank::try_from(input.to_string().as_str()).is_ok()
}

/// A single card as returned by the deck API. Extra fields in the payload
/// (`code`, `image`, `images`) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub value: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Rank, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// All 52 cards of a standard deck, suit by suit.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}
