//! Board cell identification and contents.
//!
//! ## Cell Layout
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A `Cell` is always in range. Raw indices coming from a presentation
//! layer go through `Cell::new`, which rejects anything outside `0..9`.
//!
//! ```
//! use rust_tictactoe::core::Cell;
//!
//! assert!(Cell::new(8).is_some());
//! assert!(Cell::new(9).is_none());
//! assert_eq!(Cell::all().count(), 9);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A validated board position in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from a raw index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Const constructor for fixed tables. Panics at compile time when out of range.
    pub(crate) const fn at(index: u8) -> Self {
        assert!((index as usize) < CELL_COUNT, "cell index out of range");
        Self(index)
    }

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all cells in ascending order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }
}

impl TryFrom<usize> for Cell {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or_else(|| format!("cell index {index} out of range 0..{CELL_COUNT}"))
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell {}", self.0)
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// No marker placed.
    #[default]
    Empty,
    /// Marker belonging to a player.
    Occupied(PlayerId),
}

impl Marker {
    /// Check if the cell holds no marker.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marker::Empty)
    }

    /// Get the owning player, if any.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Marker::Empty => None,
            Marker::Occupied(player) => Some(player),
        }
    }

    /// Board symbol: `X`, `O`, or `.` when empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marker::Empty => '.',
            Marker::Occupied(player) => player.symbol(),
        }
    }
}
