//! The undealt cards.

use crate::core::{DeckConfig, GameRng};

use super::card::Card;

/// A deck of cards built from a `DeckConfig`.
///
/// Cards are dealt from the top (the end of the internal vector). A freshly
/// built deck is in table order: every suit of the first rank, then every
/// suit of the second rank, and so on.
///
/// ## Example
///
/// ```
/// use elevens::cards::Deck;
/// use elevens::core::{DeckConfig, GameRng};
///
/// let mut deck = Deck::new(&DeckConfig::default());
/// assert_eq!(deck.size(), 52);
///
/// deck.shuffle(&mut GameRng::new(42));
/// let card = deck.deal().unwrap();
/// assert_eq!(deck.size(), 51);
/// assert!(card.point_value() <= 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build one card per (rank, suit) pair.
    #[must_use]
    pub fn new(config: &DeckConfig) -> Self {
        let cards = config
            .ranks
            .iter()
            .zip(&config.point_values)
            .flat_map(|(&rank, &value)| {
                config
                    .suits
                    .iter()
                    .map(move |&suit| Card::new(rank, suit, value))
            })
            .collect();

        Self { cards }
    }

    /// Shuffle the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal the top card, or `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Check if every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "size = {}", self.size())?;
        for card in self.cards.iter().rev() {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = Deck::new(&DeckConfig::default());
        assert_eq!(deck.size(), 52);

        let distinct: FxHashSet<_> = deck.cards.iter().map(|c| (c.rank, c.suit)).collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn test_point_values_follow_config() {
        let deck = Deck::new(&DeckConfig::default());
        for card in &deck.cards {
            match card.rank {
                Rank::Numeric(n) => assert_eq!(card.point_value(), u32::from(n)),
                _ => assert_eq!(card.point_value(), 0),
            }
        }
    }

    #[test]
    fn test_deal_until_empty() {
        let config = DeckConfig {
            ranks: vec![Rank::ACE, Rank::King],
            suits: vec![Suit::Clubs],
            point_values: vec![1, 0],
        };
        let mut deck = Deck::new(&config);

        assert_eq!(deck.deal(), Some(Card::new(Rank::King, Suit::Clubs, 0)));
        assert_eq!(deck.deal(), Some(Card::new(Rank::ACE, Suit::Clubs, 1)));
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a = Deck::new(&DeckConfig::default());
        let mut b = Deck::new(&DeckConfig::default());
        let unshuffled = a.clone();

        a.shuffle(&mut GameRng::new(9));
        b.shuffle(&mut GameRng::new(9));

        assert_eq!(a, b);
        assert_ne!(a, unshuffled);
        assert_eq!(a.size(), 52);
    }

    #[test]
    fn test_display() {
        let config = DeckConfig {
            ranks: vec![Rank::Queen],
            suits: vec![Suit::Hearts],
            point_values: vec![0],
        };
        let deck = Deck::new(&config);
        assert_eq!(deck.to_string(), "size = 1\nqueen of hearts (point value = 0)\n");
    }
}
