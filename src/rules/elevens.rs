//! Elevens removal rules.
//!
//! Two groups may be removed:
//! 1. Two numeric cards whose point values add up to 11
//! 2. A jack, a queen and a king, in any order
//!
//! Face cards are recognized by rank, never by point value.

use smallvec::SmallVec;

use crate::board::{selected_cards, Board};
use crate::cards::{Card, Rank};
use crate::error::SelectionError;

use super::engine::RulesEngine;

/// Point total a removable pair must reach.
pub const PAIR_TOTAL: u32 = 11;

const FACE_TRIPLE: [Rank; 3] = [Rank::Jack, Rank::Queen, Rank::King];

/// Stateless Elevens rule evaluator.
///
/// ## Example
///
/// ```
/// use elevens::cards::{Card, Rank, Suit};
/// use elevens::rules::{ElevensRules, RulesEngine};
///
/// let board = vec![
///     Some(Card::new(Rank::Numeric(4), Suit::Spades, 4)),
///     Some(Card::new(Rank::Numeric(7), Suit::Clubs, 7)),
///     None,
/// ];
///
/// let rules = ElevensRules;
/// assert!(rules.is_legal_group(&board, &[0, 1]).unwrap());
/// assert!(rules.another_play_possible(&board));
/// assert!(rules.is_legal_group(&board, &[0, 2]).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElevensRules;

impl ElevensRules {
    /// Two numeric cards adding up to 11.
    #[must_use]
    pub fn is_pair_sum_11(a: &Card, b: &Card) -> bool {
        !a.rank.is_face()
            && !b.rank.is_face()
            && a.point_value().checked_add(b.point_value()) == Some(PAIR_TOTAL)
    }

    /// Exactly one jack, one queen and one king.
    #[must_use]
    pub fn is_face_triple(a: &Card, b: &Card, c: &Card) -> bool {
        let mut ranks = [a.rank, b.rank, c.rank];
        ranks.sort_unstable();
        ranks == FACE_TRIPLE
    }
}

impl RulesEngine for ElevensRules {
    fn is_legal_group<B: Board + ?Sized>(
        &self,
        board: &B,
        selection: &[usize],
    ) -> Result<bool, SelectionError> {
        let cards = selected_cards(board, selection)?;

        let legal = match cards.as_slice() {
            [a, b] => Self::is_pair_sum_11(a, b),
            [a, b, c] => Self::is_face_triple(a, b, c),
            _ => false,
        };

        log::trace!("selection {:?} legal: {}", selection, legal);
        Ok(legal)
    }

    fn another_play_possible<B: Board + ?Sized>(&self, board: &B) -> bool {
        let cards: SmallVec<[&Card; 9]> = board.occupied().map(|(_, card)| card).collect();

        let pair = cards.iter().enumerate().any(|(i, a)| {
            cards[i + 1..].iter().any(|b| Self::is_pair_sum_11(a, b))
        });

        pair || FACE_TRIPLE
            .iter()
            .all(|&face| cards.iter().any(|card| card.rank == face))
    }

    fn group_sizes(&self) -> &[usize] {
        &[2, 3]
    }
}
