//! Core engine types: configuration and RNG.
//!
//! Both are consumed by the deck and board. The rules themselves need
//! neither.

pub mod config;
pub mod rng;

pub use config::{DeckConfig, GameConfig, BOARD_SIZE};
pub use rng::{GameRng, DECK_STREAM};
