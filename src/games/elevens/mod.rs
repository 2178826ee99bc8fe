//! Elevens solitaire.
//!
//! Nine cards are dealt face up. The player removes pairs of numeric cards
//! totalling 11, or a jack, queen and king together, and each removed card
//! is replaced from the deck:
//! - The game is won when the deck and the board are both empty
//! - The game is lost when cards remain but no legal group does

mod game;

pub use game::{ElevensGame, ElevensGameBuilder, GameStatus, Play};
