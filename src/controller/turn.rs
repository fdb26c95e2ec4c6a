//! Turn sequencing state machine.

use im::Vector;
use tracing::{debug, info, instrument};

use super::policy::{ComputerPolicy, UniformRandom};
use crate::board::Board;
use crate::core::{Cell, GameRng, MoveRecord, PlayerId, PlayerKind, SessionConfig, CELL_COUNT};
use crate::rules::{GameStatus, MoveError, MoveOutcome};

/// Owns a board and decides whose turn it is.
///
/// ## States
///
/// `InProgress` accepts moves. `Won` and `Tied` reject every move until
/// `reset` starts a new game on a fresh board.
///
/// ## Transition
///
/// A submitted move is rejected when the game is over or the cell is not a
/// legal move. Otherwise the current player's marker is placed, then the
/// board is checked for a win, then for a tie, and only if neither applies
/// does the turn pass to the other player.
///
/// Each call takes `&mut self` and runs to completion, so a move is never
/// observed half-applied.
///
/// ## Example
///
/// ```
/// use rust_tictactoe::controller::TurnController;
/// use rust_tictactoe::core::{PlayerId, SessionConfig};
/// use rust_tictactoe::rules::GameStatus;
///
/// let mut game = TurnController::new(SessionConfig::human_vs_human());
/// for cell in [0, 3, 1, 4] {
///     assert!(game.submit_move(cell).accepted);
/// }
/// let outcome = game.submit_move(2);
/// assert_eq!(outcome.status.winner(), Some(PlayerId::Player1));
/// assert!(!game.submit_move(5).accepted);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController<P: ComputerPolicy = UniformRandom> {
    pub(super) config: SessionConfig,
    pub(super) board: Board,
    pub(super) current_player: PlayerId,
    pub(super) status: GameStatus,
    pub(super) history: Vector<MoveRecord>,
    /// Session-level stream, forked once per game.
    pub(super) session_rng: GameRng,
    /// Stream for the game in progress.
    pub(super) game_rng: GameRng,
    pub(super) game_number: u32,
    pub(super) policy: P,
}

impl TurnController<UniformRandom> {
    /// Start a session with uniformly random computer players.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_policy(config, UniformRandom)
    }
}

impl<P: ComputerPolicy> TurnController<P> {
    /// Start a session with a custom computer policy.
    #[instrument(skip(policy))]
    pub fn with_policy(config: SessionConfig, policy: P) -> Self {
        let mut session_rng = GameRng::new(config.seed);
        let game_rng = session_rng.fork();
        Self {
            board: Board::new(),
            current_player: config.first_player,
            status: GameStatus::InProgress,
            history: Vector::new(),
            session_rng,
            game_rng,
            game_number: 1,
            policy,
            config,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Player whose marker the next accepted move places.
    ///
    /// After a win this is still the winner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Whether the presentation layer should poll for input or let the
    /// computer move.
    #[must_use]
    pub fn current_player_kind(&self) -> PlayerKind {
        self.config.kind_of(self.current_player)
    }

    #[must_use]
    pub fn player_kind(&self, player: PlayerId) -> PlayerKind {
        self.config.kind_of(player)
    }

    /// Accepted moves of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// 1-based count of games started in this session.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// True when the game is in progress and `index` is an empty cell.
    #[must_use]
    pub fn is_legal_move(&self, index: usize) -> bool {
        !self.status.is_terminal() && self.board.is_legal_move(index)
    }

    /// True when a computer seat is to move in a game in progress.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        !self.status.is_terminal() && self.current_player_kind() == PlayerKind::Computer
    }

    // === Transitions ===

    /// Submit a move for the current player.
    ///
    /// Rejected moves leave the controller untouched and report
    /// `accepted = false` alongside the unchanged status.
    pub fn submit_move(&mut self, index: usize) -> MoveOutcome {
        match self.try_submit_move(index) {
            Ok(status) => MoveOutcome::accepted(status),
            Err(err) => {
                debug!(index, %err, "move rejected");
                MoveOutcome::rejected(self.status)
            }
        }
    }

    /// Submit a move, reporting why it was rejected.
    #[instrument(skip(self), fields(player = %self.current_player, game = self.game_number))]
    pub fn try_submit_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let cell = Cell::new(index).ok_or(MoveError::OutOfRange { index })?;
        if !self.board.is_legal_move(index) {
            return Err(MoveError::Occupied { cell });
        }

        let player = self.current_player;
        self.board.place_marker(player, cell);
        let ply = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(player, cell, ply));
        debug!(%cell, ply, "marker placed");

        if let Some((winner, row)) = self.board.check_for_win() {
            self.status = GameStatus::Won { player: winner, row };
            info!(%winner, %row, ply, "game won");
        } else if self.board.is_tie_game() {
            self.status = GameStatus::Tied;
            info!(ply, "game tied");
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.status)
    }

    /// Let the computer move if it is a computer's turn.
    ///
    /// The chosen cell goes through `submit_move` like any other move.
    /// Returns `None` when a human is to move or the game is over.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_computer_turn(&mut self) -> Option<MoveOutcome> {
        if !self.is_computer_turn() {
            return None;
        }
        let cell = self
            .policy
            .choose_move(&self.board, self.current_player, &mut self.game_rng)?;
        debug!(%cell, "computer chose");
        Some(self.submit_move(cell.index()))
    }

    /// Play computer turns until a human is to move or the game ends.
    pub fn run_computer_turns(&mut self) -> GameStatus {
        // A game never lasts more than nine moves.
        for _ in 0..CELL_COUNT {
            match self.play_computer_turn() {
                Some(outcome) if outcome.accepted => {}
                _ => break,
            }
        }
        self.status
    }

    /// Start a new game with the same configuration.
    ///
    /// The board is replaced, the first player moves again, and computer
    /// moves draw from a freshly forked RNG stream.
    #[instrument(skip(self), fields(game = self.game_number))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = self.config.first_player;
        self.status = GameStatus::InProgress;
        self.history = Vector::new();
        self.game_rng = self.session_rng.fork();
        self.game_number += 1;
        info!(game = self.game_number, "new game");
    }
}
