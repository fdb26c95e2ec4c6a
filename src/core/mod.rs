//! Core types: players, cells, RNG, configuration, move records.
//!
//! These are the building blocks shared by the board and the controller.

pub mod cell;
pub mod config;
pub mod player;
pub mod record;
pub mod rng;

pub use cell::{Cell, Marker, CELL_COUNT};
pub use config::SessionConfig;
pub use player::{PlayerId, PlayerKind, PlayerMap, PLAYER_COUNT};
pub use record::MoveRecord;
pub use rng::{GameRng, GameRngState};
