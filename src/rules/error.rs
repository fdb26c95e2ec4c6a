//! Move rejection reasons.

use derive_more::{Display, Error};

use crate::core::Cell;

/// Why a submitted move was not applied.
///
/// Every variant is recoverable: the game is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game is won or tied. Reset before moving again.
    #[display("game is over, reset to play again")]
    GameOver,
    /// Index outside the board.
    #[display("cell index {index} is out of range 0..9")]
    OutOfRange { index: usize },
    /// Cell already holds a marker.
    #[display("{cell} is already occupied")]
    Occupied { cell: Cell },
}
