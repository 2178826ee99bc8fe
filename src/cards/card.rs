//! Playing cards.
//!
//! A `Card` is an immutable value: rank, suit and the point value assigned
//! by the deck configuration. Face cards are told apart by their `Rank`
//! tag, never by their point value.

use serde::{Deserialize, Serialize};

/// Card rank.
///
/// Aces are `Numeric(1)`. Numeric ranks run 1..=10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Numeric(u8),
    Jack,
    Queen,
    King,
}

impl Rank {
    /// The ace, which counts as 1.
    pub const ACE: Rank = Rank::Numeric(1);

    /// The thirteen standard ranks, ace through king.
    #[must_use]
    pub fn standard() -> Vec<Rank> {
        (1..=10)
            .map(Rank::Numeric)
            .chain([Rank::Jack, Rank::Queen, Rank::King])
            .collect()
    }

    /// Check if this is a jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        !matches!(self, Rank::Numeric(_))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Numeric(1) => write!(f, "ace"),
            Rank::Numeric(n) => write!(f, "{}", n),
            Rank::Jack => write!(f, "jack"),
            Rank::Queen => write!(f, "queen"),
            Rank::King => write!(f, "king"),
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        };
        f.write_str(name)
    }
}

/// A single playing card.
///
/// ## Example
///
/// ```
/// use elevens::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Numeric(7), Suit::Hearts, 7);
/// assert_eq!(card.point_value(), 7);
/// assert!(!card.rank.is_face());
/// assert_eq!(card.to_string(), "7 of hearts (point value = 7)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    point_value: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, point_value: u32) -> Self {
        Self { rank, suit, point_value }
    }

    /// Point value used by the pair-sums-to-11 rule.
    #[must_use]
    pub const fn point_value(&self) -> u32 {
        self.point_value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} (point value = {})",
            self.rank, self.suit, self.point_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ranks() {
        let ranks = Rank::standard();
        assert_eq!(ranks.len(), 13);
        assert_eq!(ranks[0], Rank::ACE);
        assert_eq!(ranks[9], Rank::Numeric(10));
        assert_eq!(&ranks[10..], &[Rank::Jack, Rank::Queen, Rank::King]);
    }

    #[test]
    fn test_is_face() {
        assert!(!Rank::ACE.is_face());
        assert!(!Rank::Numeric(10).is_face());
        assert!(Rank::Jack.is_face());
        assert!(Rank::Queen.is_face());
        assert!(Rank::King.is_face());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rank::ACE.to_string(), "ace");
        assert_eq!(Rank::Queen.to_string(), "queen");
        assert_eq!(Suit::Diamonds.to_string(), "diamonds");

        let king = Card::new(Rank::King, Suit::Spades, 0);
        assert_eq!(format!("{}", king), "king of spades (point value = 0)");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::Numeric(4), Suit::Clubs, 4);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
