//! Property tests over arbitrary move sequences.

use proptest::prelude::*;

use rust_tictactoe::controller::TurnController;
use rust_tictactoe::core::{PlayerId, SessionConfig, CELL_COUNT};
use rust_tictactoe::rules::GameStatus;

/// Raw indices, including out-of-range ones.
fn move_sequence() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..40)
}

proptest! {
    /// A move is accepted iff the controller said it was legal, and a
    /// rejected move changes nothing.
    #[test]
    fn prop_rejected_moves_never_mutate(moves in move_sequence()) {
        let mut game = TurnController::new(SessionConfig::human_vs_human());

        for index in moves {
            let legal = game.is_legal_move(index);
            let before = game.snapshot();
            let outcome = game.submit_move(index);

            prop_assert_eq!(outcome.accepted, legal);
            prop_assert_eq!(outcome.status, game.status());
            if !legal {
                prop_assert_eq!(game.snapshot(), before);
            }
        }
    }

    /// Every accepted move fills a distinct cell, players alternate, and the
    /// game ends on the first win or tie.
    #[test]
    fn prop_game_invariants(moves in move_sequence()) {
        let mut game = TurnController::new(SessionConfig::human_vs_human());
        let mut accepted = Vec::new();

        for index in moves {
            let was_terminal = game.status().is_terminal();
            let outcome = game.submit_move(index);
            if was_terminal {
                prop_assert!(!outcome.accepted);
            }
            if outcome.accepted {
                accepted.push(index);
            }
        }

        let mut seen = accepted.clone();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), accepted.len());
        prop_assert_eq!(game.board().occupied_count(), accepted.len());

        let mut expected = PlayerId::Player1;
        for record in game.history().iter() {
            prop_assert_eq!(record.player, expected);
            expected = expected.opponent();
        }

        match game.status() {
            GameStatus::Won { player, row } => {
                for cell in row.cells() {
                    prop_assert_eq!(game.board().get(cell).player(), Some(player));
                }
                prop_assert_eq!(game.history().last().map(|r| r.player), Some(player));
            }
            GameStatus::Tied => {
                prop_assert_eq!(accepted.len(), CELL_COUNT);
                prop_assert_eq!(game.board().check_for_win(), None);
            }
            GameStatus::InProgress => {
                prop_assert!(accepted.len() < CELL_COUNT);
                prop_assert_eq!(game.board().check_for_win(), None);
            }
        }
    }

    /// Random computer games always terminate within nine moves.
    #[test]
    fn prop_computer_games_terminate(seed in any::<u64>()) {
        let mut game = TurnController::new(SessionConfig::computer_vs_computer().with_seed(seed));
        let status = game.run_computer_turns();

        prop_assert!(status.is_terminal());
        prop_assert!(game.history().len() <= CELL_COUNT);
        prop_assert!(game.history().len() >= 5);
    }
}
