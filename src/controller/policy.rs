//! Computer move selection.
//!
//! The controller asks a `ComputerPolicy` for a cell whenever a computer
//! seat is to move, then submits that cell like any other caller.

use crate::board::Board;
use crate::core::{Cell, GameRng, PlayerId};

/// Picks a move for a computer-controlled player.
pub trait ComputerPolicy: Send + Sync {
    /// Choose a cell for `player` to play.
    ///
    /// Must return an empty cell, or `None` if the board is full.
    fn choose_move(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Option<Cell>;
}

/// Uniformly random choice among the empty cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl ComputerPolicy for UniformRandom {
    fn choose_move(&self, board: &Board, _player: PlayerId, rng: &mut GameRng) -> Option<Cell> {
        board.computer_move(rng)
    }
}
