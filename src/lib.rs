//! # elevens
//!
//! Rules engine for the Elevens solitaire card game.
//!
//! ## Design Principles
//!
//! 1. **Rules Read, Never Write**: `ElevensRules` is stateless and only sees
//!    a board through the two-method `Board` trait.
//!
//! 2. **Ranks, Not Sentinels**: Face cards are identified by their `Rank`
//!    tag. Point values only matter for the pair-sums-to-11 rule.
//!
//! 3. **Configuration Over Convention**: Rank, suit and point value tables
//!    live in `DeckConfig`, separate from the rules.
//!
//! ## Modules
//!
//! - `core`: Configuration and deterministic RNG
//! - `cards`: Ranks, suits, cards and the deck
//! - `board`: `Board` trait, selections, and the concrete `CardBoard`
//! - `rules`: `RulesEngine` trait and `ElevensRules`
//! - `games`: The Elevens game driver
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{DeckConfig, GameConfig, GameRng, BOARD_SIZE};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::board::{Board, CardBoard, Selection};

pub use crate::rules::{ElevensRules, RulesEngine};

pub use crate::games::elevens::{ElevensGame, ElevensGameBuilder, GameStatus, Play};

pub use crate::error::{ConfigError, GameError, SelectionError};
