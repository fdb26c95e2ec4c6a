//! Python bindings for the tic-tac-toe engine.
//!
//! Lets a Python front end drive a session: poll `current_player_kind()`,
//! forward clicks to `submit_move`, and call `play_computer_turn` (after
//! whatever visual pause it likes) when the computer is to move.
//!
//! # Quick Start
//!
//! ```python
//! import rust_tictactoe as ttt
//!
//! game = ttt.TicTacToe(player2_computer=True, seed=7)
//! game.submit_move(4)
//! game.play_computer_turn()
//! print(game.cells, game.status)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust_tictactoe: tic-tac-toe rules and turn sequencing.
#[pymodule]
fn rust_tictactoe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTicTacToe>()?;
    Ok(())
}
