//! Rules engine trait for removal games.
//!
//! Games implement `RulesEngine` to define:
//! - Which selections form a removable group
//! - Whether any removable group is left on the board
//!
//! The engine only reads the board through the `Board` trait.

use crate::board::{Board, Selection};
use crate::error::SelectionError;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_legal_group`: Contract violations in the selection are errors,
///   everything else that is not a legal group is `Ok(false)`
/// - `another_play_possible`: Must agree with `legal_groups` being non-empty
/// - `group_sizes`: Sizes `legal_groups` enumerates
pub trait RulesEngine {
    /// Check whether the selected slots form a legal group.
    fn is_legal_group<B: Board + ?Sized>(
        &self,
        board: &B,
        selection: &[usize],
    ) -> Result<bool, SelectionError>;

    /// Check whether at least one legal group is on the board.
    fn another_play_possible<B: Board + ?Sized>(&self, board: &B) -> bool;

    /// Selection sizes that can ever be legal.
    fn group_sizes(&self) -> &[usize];

    // === Convenience Methods ===

    /// Enumerate every legal group among the occupied slots.
    ///
    /// Groups are listed with ascending indices, smaller groups first.
    fn legal_groups<B: Board + ?Sized>(&self, board: &B) -> Vec<Selection> {
        let occupied: Vec<usize> = board.occupied().map(|(index, _)| index).collect();
        let mut groups = Vec::new();

        for &size in self.group_sizes() {
            self.enumerate_groups(board, &occupied, size, &mut Selection::new(), &mut groups);
        }

        groups
    }

    /// Helper to enumerate groups of `size` slots drawn from `candidates` recursively.
    fn enumerate_groups<B: Board + ?Sized>(
        &self,
        board: &B,
        candidates: &[usize],
        size: usize,
        prefix: &mut Selection,
        out: &mut Vec<Selection>,
    ) {
        if prefix.len() == size {
            if let Ok(true) = self.is_legal_group(board, &prefix[..]) {
                out.push(prefix.clone());
            }
            return;
        }

        for (i, &index) in candidates.iter().enumerate() {
            prefix.push(index);
            self.enumerate_groups(board, &candidates[i + 1..], size, prefix, out);
            prefix.pop();
        }
    }
}
