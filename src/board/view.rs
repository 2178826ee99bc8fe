//! Read-only board capability.
//!
//! The rules only ever need two things from a board: how many slots it has
//! and which card, if any, sits in a slot. Anything that can answer those
//! implements `Board`.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::SelectionError;

/// Slot indices proposed for removal, in the order the caller picked them.
pub type Selection = SmallVec<[usize; 3]>;

/// Read access to a fixed-size row of card slots.
///
/// `card_at` returns `None` for an empty slot and for an index past the end.
///
/// ## Example
///
/// ```
/// use elevens::board::Board;
/// use elevens::cards::{Card, Rank, Suit};
///
/// let slots = vec![Some(Card::new(Rank::ACE, Suit::Hearts, 1)), None];
/// assert_eq!(slots.slot_count(), 2);
/// assert!(slots.card_at(0).is_some());
/// assert!(slots.card_at(1).is_none());
/// ```
pub trait Board {
    /// Number of slots, occupied or not.
    fn slot_count(&self) -> usize;

    /// The card in slot `index`.
    fn card_at(&self, index: usize) -> Option<&Card>;

    /// Iterate over `(index, card)` for every occupied slot.
    fn occupied(&self) -> Occupied<'_, Self> {
        Occupied { board: self, next: 0 }
    }
}

/// Iterator over the occupied slots of a board.
pub struct Occupied<'a, B: ?Sized> {
    board: &'a B,
    next: usize,
}

impl<'a, B: Board + ?Sized> Iterator for Occupied<'a, B> {
    type Item = (usize, &'a Card);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.board.slot_count() {
            let index = self.next;
            self.next += 1;
            if let Some(card) = self.board.card_at(index) {
                return Some((index, card));
            }
        }
        None
    }
}

impl Board for [Option<Card>] {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.get(index).and_then(Option::as_ref)
    }
}

impl Board for Vec<Option<Card>> {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn card_at(&self, index: usize) -> Option<&Card> {
        self.as_slice().card_at(index)
    }
}

/// Resolve a selection to the cards it names.
///
/// Fails on the first index that is out of range, names an empty slot, or
/// repeats an earlier index.
pub fn selected_cards<'a, B: Board + ?Sized>(
    board: &'a B,
    selection: &[usize],
) -> Result<SmallVec<[&'a Card; 3]>, SelectionError> {
    let slot_count = board.slot_count();
    let mut cards = SmallVec::with_capacity(selection.len());

    for (pos, &index) in selection.iter().enumerate() {
        if index >= slot_count {
            return Err(SelectionError::IndexOutOfRange { index, slot_count });
        }
        if selection[..pos].contains(&index) {
            return Err(SelectionError::DuplicateIndex { index });
        }
        let card = board
            .card_at(index)
            .ok_or(SelectionError::EmptySlot { index })?;
        cards.push(card);
    }

    Ok(cards)
}
