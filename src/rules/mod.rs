//! Game status, move outcomes and rejection reasons.
//!
//! These are the values the controller reports back to its caller after
//! each move. The presentation layer renders `GameStatus`; `MoveError`
//! explains a rejected move when the caller asks for it.

mod error;
mod status;

pub use error::MoveError;
pub use status::{GameStatus, MoveOutcome};
