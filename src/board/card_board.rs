//! Concrete board backed by a shuffled deck.

use crate::cards::{Card, Deck};
use crate::core::{DeckConfig, GameConfig, GameRng};
use crate::error::{ConfigError, SelectionError};

use super::view::{selected_cards, Board};

/// A fixed-size row of slots dealt from its own deck.
///
/// Removed cards are replaced from the deck. Once the deck runs out,
/// removed slots stay empty.
///
/// ## Example
///
/// ```
/// use elevens::board::{Board, CardBoard};
/// use elevens::core::GameConfig;
///
/// let board = CardBoard::new(&GameConfig::default(), 42).unwrap();
/// assert_eq!(board.slot_count(), 9);
/// assert_eq!(board.deck_size(), 43);
/// assert_eq!(board.card_indexes().len(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct CardBoard {
    slots: Vec<Option<Card>>,
    deck: Deck,
    deck_config: DeckConfig,
    rng: GameRng,
}

impl CardBoard {
    /// Create a board, shuffle its deck and deal every slot.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut board = Self {
            slots: vec![None; config.board_size],
            deck: Deck::new(&config.deck),
            deck_config: config.deck.clone(),
            rng: GameRng::deck(seed),
        };
        board.new_game();
        Ok(board)
    }

    /// Start over with a full, reshuffled deck and a freshly dealt board.
    ///
    /// The shuffle stream carries on from the previous game, so each new
    /// game from the same board gets a different deal.
    pub fn new_game(&mut self) {
        self.deck = Deck::new(&self.deck_config);
        self.deck.shuffle(&mut self.rng);
        self.deal_my_cards();

        log::debug!(
            "new game: {} slots dealt, {} cards left in deck",
            self.card_indexes().len(),
            self.deck.size()
        );
    }

    /// Fill every slot from the deck, leaving slots empty once it runs out.
    pub fn deal_my_cards(&mut self) {
        for slot in &mut self.slots {
            *slot = self.deck.deal();
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of cards still in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    /// Indices of the occupied slots, ascending.
    #[must_use]
    pub fn card_indexes(&self) -> Vec<usize> {
        self.occupied().map(|(index, _)| index).collect()
    }

    /// Remove the selected cards, dealing a replacement into each slot.
    ///
    /// The selection is checked before anything moves; on error the board is
    /// unchanged. Returns the removed cards in selection order.
    pub fn replace_selected_cards(&mut self, selection: &[usize]) -> Result<Vec<Card>, SelectionError> {
        let removed: Vec<Card> = selected_cards(&*self, selection)?
            .into_iter()
            .copied()
            .collect();

        for &index in selection {
            self.slots[index] = self.deck.deal();
        }

        log::trace!(
            "replaced slots {:?}, {} cards left in deck",
            selection,
            self.deck.size()
        );
        Ok(removed)
    }

    /// The game is won once every card has been dealt and removed.
    #[must_use]
    pub fn game_is_won(&self) -> bool {
        self.deck.is_empty() && self.is_empty()
    }
}

impl Board for CardBoard {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.slots.card_at(index)
    }
}

impl std::fmt::Display for CardBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(card) => writeln!(f, "{}: {}", index, card)?,
                None => writeln!(f, "{}: <empty>", index)?,
            }
        }
        Ok(())
    }
}
