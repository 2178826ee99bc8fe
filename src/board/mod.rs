//! Board slots.
//!
//! ## Key Types
//!
//! - `Board`: Read-only capability the rules evaluate against
//! - `Selection`: Slot indices proposed for removal
//! - `CardBoard`: Fixed-size board dealt from its own shuffled deck

pub mod card_board;
pub mod view;

pub use card_board::CardBoard;
pub use view::{selected_cards, Board, Occupied, Selection};
