//! Turn sequencing for a game session.
//!
//! `TurnController` owns the board for one game at a time, tracks whose
//! turn it is, and turns board results into `GameStatus` transitions.
//! Computer seats are driven through the same `submit_move` path as human
//! input, with the cell chosen by a `ComputerPolicy`.
//!
//! The controller never blocks or sleeps. Pacing computer moves for
//! display is left to the presentation layer.

mod policy;
mod snapshot;
mod turn;

pub use policy::{ComputerPolicy, UniformRandom};
pub use snapshot::{ControllerSnapshot, SnapshotError};
pub use turn::TurnController;
