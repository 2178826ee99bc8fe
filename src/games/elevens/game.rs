//! Elevens game driver.

use crate::board::{CardBoard, Selection};
use crate::cards::Card;
use crate::core::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::rules::{ElevensRules, RulesEngine};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// At least one legal group is on the board.
    InProgress,
    /// Every card has been removed.
    Won,
    /// Cards remain but no legal group does.
    Lost,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Outcome of an accepted play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
    /// Cards taken off the board, in selection order.
    pub removed: Vec<Card>,
    /// Status after the replacements were dealt.
    pub status: GameStatus,
}

/// A board paired with the rules that decide what may leave it.
#[derive(Clone, Debug)]
pub struct ElevensGame<R: RulesEngine = ElevensRules> {
    board: CardBoard,
    rules: R,
    plays: usize,
}

/// Builder for creating an ElevensGame.
#[derive(Clone, Debug, Default)]
pub struct ElevensGameBuilder {
    config: GameConfig,
    seed: u64,
}

impl ElevensGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build a game with the standard Elevens rules.
    pub fn build(self) -> Result<ElevensGame, ConfigError> {
        self.build_with_rules(ElevensRules)
    }

    /// Build a game with custom rules.
    pub fn build_with_rules<R: RulesEngine>(self, rules: R) -> Result<ElevensGame<R>, ConfigError> {
        let board = CardBoard::new(&self.config, self.seed)?;
        log::debug!(
            "built game: seed {}, {} slots, {} card deck",
            self.seed,
            self.config.board_size,
            self.config.deck.deck_size()
        );

        Ok(ElevensGame {
            board,
            rules,
            plays: 0,
        })
    }
}

impl<R: RulesEngine> ElevensGame<R> {
    /// Get the board.
    pub fn board(&self) -> &CardBoard {
        &self.board
    }

    /// Get the rules.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Number of groups removed since the last (re)start.
    pub fn plays_made(&self) -> usize {
        self.plays
    }

    /// Remove a group if it is legal.
    ///
    /// An illegal group leaves the board untouched.
    pub fn play(&mut self, selection: &[usize]) -> Result<Play, GameError> {
        if !self.rules.is_legal_group(&self.board, selection)? {
            log::debug!("rejected illegal group {:?}", selection);
            return Err(GameError::IllegalGroup {
                selection: selection.to_vec(),
            });
        }

        let removed = self.board.replace_selected_cards(selection)?;
        self.plays += 1;
        let status = self.status();

        log::debug!(
            "play {}: removed {:?}, {} left in deck, status {:?}",
            self.plays,
            selection,
            self.board.deck_size(),
            status
        );
        Ok(Play { removed, status })
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.game_is_won() {
            GameStatus::Won
        } else if self.rules.another_play_possible(&self.board) {
            GameStatus::InProgress
        } else {
            GameStatus::Lost
        }
    }

    /// First legal group on the board, if any.
    pub fn hint(&self) -> Option<Selection> {
        self.rules.legal_groups(&self.board).into_iter().next()
    }

    /// Deal a new game on the same board.
    pub fn restart(&mut self) {
        self.board.new_game();
        self.plays = 0;
    }

    /// Play hints until the game ends. Returns the final status.
    pub fn autoplay(&mut self) -> Result<GameStatus, GameError> {
        while let Some(group) = self.hint() {
            self.play(&group)?;
        }
        Ok(self.status())
    }
}
