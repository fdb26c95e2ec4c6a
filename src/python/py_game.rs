//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::controller::TurnController;
use crate::core::{Marker, PlayerId, PlayerKind, SessionConfig};
use crate::rules::GameStatus;

fn player_from_number(number: u8) -> PyResult<PlayerId> {
    match number {
        1 => Ok(PlayerId::Player1),
        2 => Ok(PlayerId::Player2),
        other => Err(PyValueError::new_err(format!("player must be 1 or 2, got {other}"))),
    }
}

fn player_number(player: PlayerId) -> u8 {
    player.index() as u8 + 1
}

fn kind_name(kind: PlayerKind) -> &'static str {
    match kind {
        PlayerKind::Human => "human",
        PlayerKind::Computer => "computer",
    }
}

/// Python wrapper for a tic-tac-toe session.
///
/// Players are numbered 1 and 2. Cells are numbered 0-8 in row-major order.
#[pyclass(name = "TicTacToe")]
pub struct PyTicTacToe {
    inner: TurnController,
}

#[pymethods]
impl PyTicTacToe {
    /// Create a new session.
    ///
    /// # Arguments
    /// - player1_computer: Whether player 1 is computer controlled
    /// - player2_computer: Whether player 2 is computer controlled
    /// - first_player: 1 or 2
    /// - seed: RNG seed for computer moves
    #[new]
    #[pyo3(signature = (
        player1_computer = false,
        player2_computer = true,
        first_player = 1,
        seed = 42
    ))]
    fn new(player1_computer: bool, player2_computer: bool, first_player: u8, seed: u64) -> PyResult<Self> {
        let kind = |computer: bool| {
            if computer {
                PlayerKind::Computer
            } else {
                PlayerKind::Human
            }
        };
        let config = SessionConfig::human_vs_human()
            .with_player_kind(PlayerId::Player1, kind(player1_computer))
            .with_player_kind(PlayerId::Player2, kind(player2_computer))
            .with_first_player(player_from_number(first_player)?)
            .with_seed(seed);
        Ok(Self {
            inner: TurnController::new(config),
        })
    }

    /// Check whether a move on `cell` would be accepted.
    fn is_legal_move(&self, cell: usize) -> bool {
        self.inner.is_legal_move(cell)
    }

    /// Submit a move for the current player. Returns whether it was accepted.
    fn submit_move(&mut self, cell: usize) -> bool {
        self.inner.submit_move(cell).accepted
    }

    /// Let the computer move. Returns None when it is not a computer's turn.
    fn play_computer_turn(&mut self) -> Option<bool> {
        self.inner.play_computer_turn().map(|outcome| outcome.accepted)
    }

    /// Start a new game.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// "human" or "computer".
    fn current_player_kind(&self) -> &'static str {
        kind_name(self.inner.current_player_kind())
    }

    #[getter]
    fn current_player(&self) -> u8 {
        player_number(self.inner.current_player())
    }

    /// "in_progress", "won" or "tied".
    #[getter]
    fn status(&self) -> &'static str {
        match self.inner.status() {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won { .. } => "won",
            GameStatus::Tied => "tied",
        }
    }

    #[getter]
    fn winner(&self) -> Option<u8> {
        self.inner.status().winner().map(player_number)
    }

    #[getter]
    fn winning_row(&self) -> Option<usize> {
        self.inner.status().winning_row().map(|row| row.index())
    }

    /// Cell contents: 0 for empty, otherwise the player number.
    #[getter]
    fn cells(&self) -> Vec<u8> {
        self.inner
            .board()
            .cells()
            .iter()
            .map(|marker| match marker {
                Marker::Empty => 0,
                Marker::Occupied(player) => player_number(*player),
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "TicTacToe(game={}, to_move=P{}, status={})",
            self.inner.game_number(),
            player_number(self.inner.current_player()),
            self.status()
        )
    }

    fn __str__(&self) -> String {
        self.inner.board().to_string()
    }
}
