//! Game status and move outcomes.

use serde::{Deserialize, Serialize};

use crate::board::RowIndex;
use crate::core::PlayerId;

/// Where a game stands.
///
/// `Won` and `Tied` are terminal until the controller is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    #[default]
    InProgress,
    /// `player` completed `row`.
    Won { player: PlayerId, row: RowIndex },
    /// Board filled with no complete row.
    Tied,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Get the winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }

    /// Get the winning row, if any.
    #[must_use]
    pub fn winning_row(&self) -> Option<RowIndex> {
        match self {
            GameStatus::Won { row, .. } => Some(*row),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { player, .. } => write!(f, "{player} Wins!"),
            GameStatus::Tied => write!(f, "Tie Game!"),
        }
    }
}

/// Result of submitting a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the move was applied. A rejected move leaves the game untouched.
    pub accepted: bool,

    /// Status after the call.
    pub status: GameStatus,
}

impl MoveOutcome {
    #[must_use]
    pub fn accepted(status: GameStatus) -> Self {
        Self { accepted: true, status }
    }

    #[must_use]
    pub fn rejected(status: GameStatus) -> Self {
        Self { accepted: false, status }
    }
}
