//! Removal rules.
//!
//! `RulesEngine` is the seam between a board and the game that decides what
//! may be removed from it. `ElevensRules` is the Elevens implementation.

pub mod elevens;
pub mod engine;

pub use elevens::{ElevensRules, PAIR_TOTAL};
pub use engine::RulesEngine;
