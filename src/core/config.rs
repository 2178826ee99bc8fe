//! Game configuration types.
//!
//! Rank, suit and point value tables are data, not behavior:
//! - `DeckConfig`: Defines which cards the deck holds and their point values
//! - `GameConfig`: Board size plus the deck configuration
//!
//! The rules never read configuration. Only the deck and board do.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::error::ConfigError;

/// Number of slots on an Elevens board.
pub const BOARD_SIZE: usize = 9;

/// Deck composition.
///
/// `point_values[i]` is the point value of every card of rank `ranks[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Ranks, in deck order.
    pub ranks: Vec<Rank>,

    /// Suits, in deck order.
    pub suits: Vec<Suit>,

    /// Point value per rank, parallel to `ranks`.
    pub point_values: Vec<u32>,
}

impl Default for DeckConfig {
    /// The standard 52-card deck. Face cards are worth 0.
    fn default() -> Self {
        Self {
            ranks: Rank::standard(),
            suits: Suit::ALL.to_vec(),
            point_values: (1..=10).chain([0, 0, 0]).collect(),
        }
    }
}

impl DeckConfig {
    /// Number of cards a deck built from this configuration holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }

    /// Validate the tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranks.is_empty() {
            return Err(ConfigError::Validation("deck.ranks must not be empty".into()));
        }
        if self.suits.is_empty() {
            return Err(ConfigError::Validation("deck.suits must not be empty".into()));
        }
        if self.ranks.len() != self.point_values.len() {
            return Err(ConfigError::Validation(format!(
                "deck.point_values has {} entries but deck.ranks has {}",
                self.point_values.len(),
                self.ranks.len()
            )));
        }
        if let Some(bad) = self
            .ranks
            .iter()
            .find(|r| matches!(r, Rank::Numeric(n) if !(1..=10).contains(n)))
        {
            return Err(ConfigError::Validation(format!(
                "numeric rank {:?} must be in 1..=10",
                bad
            )));
        }
        if let Some((rank, value)) = self
            .ranks
            .iter()
            .zip(&self.point_values)
            .find(|(r, v)| !r.is_face() && !(1..=10).contains(*v))
        {
            return Err(ConfigError::Validation(format!(
                "point value {} for rank {} must be in 1..=10",
                value, rank
            )));
        }

        let mut seen_ranks = FxHashSet::default();
        if let Some(dup) = self.ranks.iter().find(|r| !seen_ranks.insert(**r)) {
            return Err(ConfigError::Validation(format!("duplicate rank {}", dup)));
        }
        let mut seen_suits = FxHashSet::default();
        if let Some(dup) = self.suits.iter().find(|s| !seen_suits.insert(**s)) {
            return Err(ConfigError::Validation(format!("duplicate suit {}", dup)));
        }
        Ok(())
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use elevens::core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "board_size": 12 }"#).unwrap();
/// assert_eq!(config.board_size, 12);
/// assert_eq!(config.deck.deck_size(), 52);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of board slots.
    pub board_size: usize,

    /// Deck composition.
    pub deck: DeckConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            deck: DeckConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create the standard Elevens configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields fall back to the standard values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be > 0".into()));
        }
        if self.board_size > self.deck.deck_size() {
            return Err(ConfigError::Validation(format!(
                "board_size {} exceeds deck size {}",
                self.board_size,
                self.deck.deck_size()
            )));
        }
        self.deck.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck() {
        let deck = DeckConfig::default();
        assert_eq!(deck.deck_size(), 52);
        assert_eq!(deck.point_values[0], 1);
        assert_eq!(deck.point_values[9], 10);
        assert_eq!(deck.point_values[12], 0);
        assert!(deck.validate().is_ok());
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new().with_board_size(13);
        assert_eq!(config.board_size, 13);
        assert!(config.validate().is_ok());
        assert_eq!(GameConfig::default().board_size, BOARD_SIZE);
    }

    #[test]
    fn test_validate_zero_board() {
        let err = GameConfig::new().with_board_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_board_larger_than_deck() {
        let deck = DeckConfig {
            ranks: vec![Rank::ACE, Rank::Numeric(10)],
            suits: vec![Suit::Hearts],
            point_values: vec![1, 10],
        };
        let config = GameConfig::new().with_deck(deck);
        assert!(config.validate().is_err());
        assert!(config.with_board_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_mismatched_point_values() {
        let mut deck = DeckConfig::default();
        deck.point_values.pop();
        let err = deck.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: deck.point_values has 12 entries but deck.ranks has 13"
        );
    }

    #[test]
    fn test_validate_duplicates_and_bad_ranks() {
        let mut deck = DeckConfig::default();
        deck.ranks[1] = Rank::ACE;
        assert!(deck.validate().is_err());

        let mut deck = DeckConfig::default();
        deck.suits.push(Suit::Spades);
        assert!(deck.validate().is_err());

        let mut deck = DeckConfig::default();
        deck.ranks[0] = Rank::Numeric(11);
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_validate_numeric_point_values() {
        let mut deck = DeckConfig::default();
        deck.point_values[0] = u32::MAX;
        let err = deck.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: point value 4294967295 for rank ace must be in 1..=10"
        );

        let mut deck = DeckConfig::default();
        deck.point_values[4] = 0;
        assert!(deck.validate().is_err());

        // Face cards never pair, so their point values are unconstrained.
        let mut deck = DeckConfig::default();
        deck.point_values[10] = 9009;
        deck.point_values[11] = u32::MAX;
        assert!(deck.validate().is_ok());
    }

    #[test]
    fn test_from_json_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "board_size": 0 }"#),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = GameConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
