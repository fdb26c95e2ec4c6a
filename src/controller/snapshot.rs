//! Save and restore a controller.
//!
//! A snapshot captures everything needed to continue a session exactly
//! where it left off, including the RNG positions, so a restored session
//! makes the same computer moves the uninterrupted session would have.
//!
//! ```
//! use rust_tictactoe::controller::{ControllerSnapshot, TurnController};
//! use rust_tictactoe::core::SessionConfig;
//!
//! let mut game = TurnController::new(SessionConfig::default());
//! game.submit_move(4);
//!
//! let bytes = game.snapshot().encode().unwrap();
//! let restored = TurnController::restore(ControllerSnapshot::decode(&bytes).unwrap()).unwrap();
//! assert_eq!(restored.board(), game.board());
//! ```

use derive_more::{Display, Error};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::policy::{ComputerPolicy, UniformRandom};
use super::turn::TurnController;
use crate::board::Board;
use crate::core::{GameRng, GameRngState, MoveRecord, PlayerId, SessionConfig};
use crate::rules::GameStatus;

/// Failure to encode, decode or restore a snapshot.
#[derive(Debug, Display, Error)]
pub enum SnapshotError {
    /// Binary encoding failed.
    #[display("snapshot codec error: {_0}")]
    Codec(bincode::Error),
    /// Board, status or turn disagree with the recorded moves.
    #[display("snapshot is inconsistent with its move history")]
    Inconsistent,
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        Self::Codec(err)
    }
}

/// Serializable controller state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub config: SessionConfig,
    pub board: Board,
    pub current_player: PlayerId,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
    pub session_rng: GameRngState,
    pub game_rng: GameRngState,
    pub game_number: u32,
}

impl ControllerSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Replay the history on an empty board and compare with the stored state.
    fn is_consistent(&self) -> bool {
        let mut board = Board::new();
        let mut status = GameStatus::InProgress;
        let mut to_move = self.config.first_player;

        for (i, record) in self.history.iter().enumerate() {
            if status.is_terminal()
                || record.player != to_move
                || record.ply as usize != i + 1
                || !board.is_legal_move(record.cell.index())
            {
                return false;
            }
            board.place_marker(record.player, record.cell);
            if let Some((player, row)) = board.check_for_win() {
                status = GameStatus::Won { player, row };
            } else if board.is_tie_game() {
                status = GameStatus::Tied;
            } else {
                to_move = to_move.opponent();
            }
        }

        board == self.board && status == self.status && to_move == self.current_player
    }
}

impl<P: ComputerPolicy> TurnController<P> {
    /// Capture the full controller state.
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            config: self.config.clone(),
            board: self.board.clone(),
            current_player: self.current_player,
            status: self.status,
            history: self.history.iter().copied().collect(),
            session_rng: self.session_rng.state(),
            game_rng: self.game_rng.state(),
            game_number: self.game_number,
        }
    }

    /// Rebuild a controller with a custom policy.
    ///
    /// Fails if the stored board, status or turn could not have been
    /// produced by the stored history.
    pub fn restore_with_policy(snapshot: ControllerSnapshot, policy: P) -> Result<Self, SnapshotError> {
        if !snapshot.is_consistent() {
            return Err(SnapshotError::Inconsistent);
        }
        Ok(Self {
            board: snapshot.board,
            current_player: snapshot.current_player,
            status: snapshot.status,
            history: snapshot.history.into_iter().collect::<Vector<_>>(),
            session_rng: GameRng::from_state(&snapshot.session_rng),
            game_rng: GameRng::from_state(&snapshot.game_rng),
            game_number: snapshot.game_number,
            policy,
            config: snapshot.config,
        })
    }
}

impl TurnController<UniformRandom> {
    /// Rebuild a controller with uniformly random computer players.
    pub fn restore(snapshot: ControllerSnapshot) -> Result<Self, SnapshotError> {
        Self::restore_with_policy(snapshot, UniformRandom)
    }
}
