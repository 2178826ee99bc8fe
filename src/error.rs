//! Error types.
//!
//! Wrong selection sizes and non-matching sums are ordinary "not legal"
//! outcomes. These types cover contract violations only.

/// A selection that does not describe cards currently on the board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("slot index {index} is out of range (board has {slot_count} slots)")]
    IndexOutOfRange { index: usize, slot_count: usize },

    #[error("slot {index} is empty")]
    EmptySlot { index: usize },

    #[error("slot {index} is selected more than once")]
    DuplicateIndex { index: usize },
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors returned by the game driver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("selected cards {selection:?} do not form a legal group")]
    IllegalGroup { selection: Vec<usize> },

    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),
}
