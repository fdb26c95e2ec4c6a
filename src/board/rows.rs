//! The eight winning rows.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Number of winning rows.
pub const ROW_COUNT: usize = 8;

const fn row(a: u8, b: u8, c: u8) -> [Cell; 3] {
    [Cell::at(a), Cell::at(b), Cell::at(c)]
}

/// Cells of each row, in scan order.
///
/// Rows 0-2 are horizontal (top to bottom), 3-5 vertical (left to right),
/// 6 is the `0-4-8` diagonal and 7 the `2-4-6` diagonal. Win detection
/// scans in this order and the first complete row is reported.
pub const ROWS: [[Cell; 3]; ROW_COUNT] = [
    row(0, 1, 2),
    row(3, 4, 5),
    row(6, 7, 8),
    row(0, 3, 6),
    row(1, 4, 7),
    row(2, 5, 8),
    row(0, 4, 8),
    row(2, 4, 6),
];

/// Direction of a row, for drawing the line through a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowOrientation {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Index into `ROWS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RowIndex(u8);

impl RowIndex {
    /// Create a row index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < ROW_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The three cells of this row.
    #[must_use]
    pub const fn cells(self) -> [Cell; 3] {
        ROWS[self.0 as usize]
    }

    #[must_use]
    pub const fn orientation(self) -> RowOrientation {
        match self.0 {
            0..=2 => RowOrientation::Horizontal,
            3..=5 => RowOrientation::Vertical,
            _ => RowOrientation::Diagonal,
        }
    }

    /// Iterate over all rows in scan order.
    pub fn all() -> impl Iterator<Item = RowIndex> {
        (0..ROW_COUNT as u8).map(RowIndex)
    }
}

impl TryFrom<usize> for RowIndex {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        RowIndex::new(index).ok_or_else(|| format!("row index {index} out of range 0..{ROW_COUNT}"))
    }
}

impl From<RowIndex> for usize {
    fn from(row: RowIndex) -> Self {
        row.index()
    }
}

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}", self.0)
    }
}
