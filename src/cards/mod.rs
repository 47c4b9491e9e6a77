pub mod basic;
pub mod ordering;


pub use basic::{is_valid_rank, Card, Rank, Suit};
pub use ordering::{sort_ranks, AceOrder};
