use super::basic::Rank;

/// Where ACE sits when sorting drawn ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AceOrder {
    /// ACE=1, below the 2.
    #[default]
    First,
    /// ACE=14, above the KING.
    Last,
}

impl AceOrder {
    pub fn from_ace_first(ace_first: bool) -> Self {
        if ace_first {
            AceOrder::First
        } else {
            AceOrder::Last
        }
    }

    /// Sort value of a rank under this ordering. Both tables are injective.
    pub fn value(self, rank: Rank) -> u8 {
        match rank {
            Rank::Ace => match self {
                AceOrder::First => 1,
                AceOrder::Last => 14,
            },
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }
}

/// Returns `ranks` in ascending order under `order`.
///
/// The sort is stable, so repeated ranks keep their draw order.
pub fn sort_ranks(ranks: &[Rank], order: AceOrder) -> Vec<Rank> {
    let mut sorted = ranks.to_vec();
    sorted.sort_by_key(|rank| order.value(*rank));
    sorted
}
