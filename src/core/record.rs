//! Move history entries.
//!
//! Every accepted move is recorded so a presentation layer can redraw the
//! board from scratch, and so a finished game can be replayed.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::player::PlayerId;

/// A recorded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Where the marker was placed.
    pub cell: Cell,

    /// 1-based move number within the game.
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, cell: Cell, ply: u32) -> Self {
        Self { player, cell, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record() {
        let cell = Cell::new(4).unwrap();
        let record = MoveRecord::new(PlayerId::Player2, cell, 2);

        assert_eq!(record.player, PlayerId::Player2);
        assert_eq!(record.cell, cell);
        assert_eq!(record.ply, 2);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(PlayerId::Player1, Cell::new(8).unwrap(), 5);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
