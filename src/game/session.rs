//! Game session: one board, two players taking turns.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::core::{Board, Coord, GameConfig, Move, Player};
use crate::error::MoveError;
use crate::rules::{status, GameStatus, RulesEngine, StandardRules};

/// What happened on a committed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Player who moved.
    pub player: Player,
    /// Cell played.
    pub coord: Coord,
    /// Discs flipped by the move.
    pub flipped: usize,
    /// Player to move next, `None` once the game is over.
    pub next: Option<Player>,
    /// Player who had to pass because they had no legal move.
    pub passed: Option<Player>,
    /// Status after the move.
    pub status: GameStatus,
}

/// Builder for creating a GameSession.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.dimension < 2`, like `dimension`.
    pub fn from_config(config: GameConfig) -> Self {
        assert!(config.dimension >= 2, "Board dimension must be at least 2");
        Self { config }
    }

    pub fn dimension(mut self, dimension: usize) -> Self {
        assert!(dimension >= 2, "Board dimension must be at least 2");
        self.config.dimension = dimension;
        self
    }

    pub fn first_player(mut self, player: Player) -> Self {
        self.config.first_player = player;
        self
    }

    /// Build a session with the standard rules.
    pub fn build(self) -> GameSession<StandardRules> {
        self.build_with(StandardRules)
    }

    /// Build a session with a custom rules engine.
    pub fn build_with<R: RulesEngine>(self, rules: R) -> GameSession<R> {
        let board = Board::new(self.config.dimension);
        let status = rules.status(&board);

        GameSession {
            rules,
            board,
            current: self.config.first_player,
            turn: 1,
            status,
            config: self.config,
        }
    }
}

/// A game in progress: the board, whose turn it is, and the turn counter.
///
/// The session owns its board and only mutates it through `play`, one
/// validate-then-apply step at a time.
#[derive(Clone, Debug)]
pub struct GameSession<R = StandardRules> {
    config: GameConfig,
    rules: R,
    board: Board,
    current: Player,
    /// Turn number (starts at 1, counts committed moves).
    turn: u32,
    status: GameStatus,
}

impl<R: RulesEngine> GameSession<R> {
    /// Get the configuration this session was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Legal moves for the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, self.current)
    }

    /// Play `coord` for the current player.
    ///
    /// On rejection nothing changes: same board, same player, same turn.
    #[instrument(skip(self), fields(player = %self.current, turn = self.turn))]
    pub fn play(&mut self, coord: Coord) -> Result<TurnReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        let mv = self
            .rules
            .classify(&self.board, player, coord)
            .inspect_err(|e| debug!(error = %e, "move rejected"))?;

        let flipped = self.rules.apply(&mut self.board, &mv);
        self.turn += 1;
        debug!(%coord, flipped, "move committed");

        self.status = self.rules.status(&self.board);
        let mut passed = None;
        let next = if self.status.is_over() {
            None
        } else if self.rules.has_legal_move(&self.board, player.opponent()) {
            Some(player.opponent())
        } else if self.rules.has_legal_move(&self.board, player) {
            info!(passing = %player.opponent(), "no legal move, turn passes");
            passed = Some(player.opponent());
            Some(player)
        } else {
            // Neither side can move: settle on the current scores.
            self.status = GameStatus::Over(status::result_by_score(&self.board));
            None
        };

        if let Some(next) = next {
            self.current = next;
        }
        if let GameStatus::Over(result) = self.status {
            info!(%result, "game over");
        }

        Ok(TurnReport {
            player,
            coord,
            flipped,
            next,
            passed,
            status: self.status,
        })
    }
}
