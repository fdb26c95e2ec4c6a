//! Board state and the rules evaluated over it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rows::{RowIndex, ROWS};
use crate::core::{Cell, GameRng, Marker, PlayerId, CELL_COUNT};

/// Empty cells in ascending order. Never more than nine, so no heap allocation.
pub type EmptyCells = SmallVec<[Cell; CELL_COUNT]>;

/// 3x3 board.
///
/// The board knows markers, not turns. Sequencing lives in
/// `TurnController`, which is the only caller that should mutate a board
/// during play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Marker; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `index` is in range and the cell is empty.
    ///
    /// ```
    /// use rust_tictactoe::board::Board;
    /// use rust_tictactoe::core::{Cell, PlayerId};
    ///
    /// let mut board = Board::new();
    /// assert!(board.is_legal_move(4));
    /// board.place_marker(PlayerId::Player1, Cell::new(4).unwrap());
    /// assert!(!board.is_legal_move(4));
    /// assert!(!board.is_legal_move(9));
    /// ```
    #[must_use]
    pub fn is_legal_move(&self, index: usize) -> bool {
        Cell::new(index).is_some_and(|cell| self.get(cell).is_empty())
    }

    /// Write `player`'s marker into `cell`, overwriting whatever was there.
    ///
    /// Occupancy is not checked. Callers validate with `is_legal_move` first.
    pub fn place_marker(&mut self, player: PlayerId, cell: Cell) {
        self.cells[cell.index()] = Marker::Occupied(player);
    }

    /// Get the contents of a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Marker {
        self.cells[cell.index()]
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Marker; CELL_COUNT] {
        &self.cells
    }

    /// Empty cells in ascending index order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        Cell::all().filter(|&cell| self.get(cell).is_empty()).collect()
    }

    /// Number of cells holding a marker.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Find the first complete row, scanning rows in declaration order.
    ///
    /// When one move completes two rows at once, the lower row index is
    /// reported.
    #[must_use]
    pub fn check_for_win(&self) -> Option<(PlayerId, RowIndex)> {
        RowIndex::all().find_map(|row| {
            PlayerId::all()
                .find(|&player| self.count_in_row(row, player) == 3)
                .map(|player| (player, row))
        })
    }

    fn count_in_row(&self, row: RowIndex, player: PlayerId) -> usize {
        ROWS[row.index()]
            .iter()
            .filter(|&&cell| self.get(cell) == Marker::Occupied(player))
            .count()
    }

    /// True when every cell is occupied.
    ///
    /// Only meaningful after `check_for_win` found nothing: a full board
    /// with a complete row is a win.
    #[must_use]
    pub fn is_tie_game(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Pick an empty cell uniformly at random.
    ///
    /// Returns `None` on a full board.
    pub fn computer_move(&self, rng: &mut GameRng) -> Option<Cell> {
        rng.choose(&self.empty_cells()).copied()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for marker in line {
                write!(f, "{}", marker.symbol())?;
            }
        }
        Ok(())
    }
}
