//! Board state and rules.
//!
//! `Board` owns the nine cells and evaluates legality, wins and ties over
//! them. It has no notion of whose turn it is; players appear only as the
//! markers they leave behind.
//!
//! Winning lines are the fixed table `ROWS`, addressed by `RowIndex`.

mod grid;
mod rows;

pub use grid::{Board, EmptyCells};
pub use rows::{RowIndex, RowOrientation, ROWS, ROW_COUNT};
