//! # rust-tictactoe
//!
//! Tic-tac-toe rules and turn sequencing for a human against a computer, or
//! two humans, behind whatever front end draws the board.
//!
//! ## Design Principles
//!
//! 1. **Core Only**: No rendering, input capture, or frame timing. A
//!    presentation layer feeds cell indices in and renders what comes back.
//!
//! 2. **Configuration Over Mutation**: Who plays each seat is fixed in a
//!    `SessionConfig` when the session starts.
//!
//! 3. **Synchronous**: Every call completes its whole transition before
//!    returning. Pauses before computer moves belong to the caller.
//!
//! ## Architecture
//!
//! - **Board**: Nine cells and the eight winning rows. Evaluates legality,
//!   wins (first complete row in scan order) and ties.
//!
//! - **TurnController**: `InProgress -> Won | Tied`, with `reset` back to a
//!   fresh board. Computer seats go through the same `submit_move` path as
//!   humans.
//!
//! ## Modules
//!
//! - `core`: Players, cells, RNG, configuration, move records
//! - `board`: Board state, rows, win and tie evaluation
//! - `rules`: Game status, move outcomes, rejection reasons
//! - `controller`: Turn state machine, computer policy, snapshots
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_tictactoe::{PlayerKind, SessionConfig, TurnController};
//!
//! let mut game = TurnController::new(SessionConfig::human_vs_computer().with_seed(1));
//! while !game.status().is_terminal() {
//!     match game.current_player_kind() {
//!         PlayerKind::Human => {
//!             let cell = game.board().empty_cells()[0];
//!             game.submit_move(cell.index());
//!         }
//!         PlayerKind::Computer => {
//!             game.play_computer_turn();
//!         }
//!     }
//! }
//! println!("{}\n{}", game.board(), game.status());
//! ```

pub mod board;
pub mod controller;
pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Marker, CELL_COUNT,
    PlayerId, PlayerKind, PlayerMap,
    GameRng, GameRngState,
    SessionConfig, MoveRecord,
};

pub use crate::board::{Board, RowIndex, RowOrientation, ROWS};

pub use crate::rules::{GameStatus, MoveError, MoveOutcome};

pub use crate::controller::{
    ComputerPolicy, UniformRandom,
    TurnController, ControllerSnapshot, SnapshotError,
};
