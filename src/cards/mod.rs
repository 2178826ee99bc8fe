//! Card system: ranks, suits, cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: `Numeric(1..=10)` or a face rank (jack, queen, king)
//! - `Suit`: The four standard suits
//! - `Card`: Immutable rank, suit and point value
//! - `Deck`: Undealt cards built from a `DeckConfig`

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
