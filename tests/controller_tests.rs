//! Turn controller scenarios: full games, terminal handling, computer seats.

use rust_tictactoe::board::{Board, RowIndex};
use rust_tictactoe::controller::{ComputerPolicy, TurnController};
use rust_tictactoe::core::{Cell, GameRng, PlayerId, PlayerKind, SessionConfig};
use rust_tictactoe::rules::{GameStatus, MoveError};

/// Always plays the lowest empty cell.
#[derive(Clone, Copy, Debug, Default)]
struct LowestEmpty;

impl ComputerPolicy for LowestEmpty {
    fn choose_move(&self, board: &Board, _player: PlayerId, _rng: &mut GameRng) -> Option<Cell> {
        board.empty_cells().first().copied()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Player1 takes 0, 1, 2 while Player2 takes 3, 4: Player1 wins on row 0.
#[test]
fn test_top_row_win_scenario() {
    init_tracing();
    let mut game = TurnController::new(SessionConfig::human_vs_human());

    for cell in [0, 3, 1, 4] {
        let outcome = game.submit_move(cell);
        assert!(outcome.accepted);
        assert_eq!(outcome.status, GameStatus::InProgress);
    }

    let outcome = game.submit_move(2);
    assert!(outcome.accepted);
    assert_eq!(
        outcome.status,
        GameStatus::Won {
            player: PlayerId::Player1,
            row: RowIndex::new(0).unwrap(),
        }
    );
}

/// 0, 1, 2, 4, 3, 5, 7, 6, 8 fills the board with no line.
#[test]
fn test_tie_scenario() {
    init_tracing();
    let mut game = TurnController::new(SessionConfig::human_vs_human());
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for (i, &cell) in moves.iter().enumerate() {
        let outcome = game.submit_move(cell);
        assert!(outcome.accepted);
        if i + 1 < moves.len() {
            assert_eq!(outcome.status, GameStatus::InProgress);
        }
    }

    assert_eq!(game.status(), GameStatus::Tied);
    assert!(game.board().is_tie_game());
}

/// A winning ninth move is a win, not a tie.
#[test]
fn test_win_on_last_cell_beats_tie() {
    let mut game = TurnController::new(SessionConfig::human_vs_human());
    // X O X / O X O / O X X  -- last move at 8 completes 0-4-8.
    for cell in [0, 1, 2, 3, 4, 5, 7, 6, 8] {
        game.submit_move(cell);
    }
    assert_eq!(
        game.status(),
        GameStatus::Won {
            player: PlayerId::Player1,
            row: RowIndex::new(6).unwrap(),
        }
    );
}

/// After the game ends nothing changes until reset.
#[test]
fn test_terminal_moves_are_noops() {
    let mut game = TurnController::new(SessionConfig::human_vs_human());
    for cell in [0, 3, 1, 4, 2] {
        game.submit_move(cell);
    }
    let board = game.board().clone();
    let status = game.status();

    for cell in 0..12 {
        let outcome = game.submit_move(cell);
        assert!(!outcome.accepted);
        assert_eq!(outcome.status, status);
        assert_eq!(game.try_submit_move(cell), Err(MoveError::GameOver));
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.history().len(), 5);

    game.reset();
    assert!(game.submit_move(5).accepted);
}

/// Human seat polls input, computer seat is driven by the controller.
#[test]
fn test_human_vs_computer_loop() {
    init_tracing();
    let mut game = TurnController::with_policy(SessionConfig::human_vs_computer(), LowestEmpty);

    // Human plays the center, the computer the lowest empty cell.
    assert_eq!(game.current_player_kind(), PlayerKind::Human);
    game.submit_move(4);
    assert_eq!(game.current_player_kind(), PlayerKind::Computer);
    game.play_computer_turn();
    assert_eq!(game.board().get(Cell::new(0).unwrap()).player(), Some(PlayerId::Player2));
    assert_eq!(game.current_player_kind(), PlayerKind::Human);

    // Human cannot be moved for by the computer.
    assert_eq!(game.play_computer_turn(), None);
}

/// Computer seats use the normal move path, so history and turn order hold.
#[test]
fn test_computer_vs_computer_deterministic_policy() {
    let mut game = TurnController::with_policy(SessionConfig::computer_vs_computer(), LowestEmpty);
    let status = game.run_computer_turns();

    // 0 1 2 / 3 4 5 / 6: Player1 holds 0, 2, 4, 6 and completes 2-4-6.
    assert_eq!(
        status,
        GameStatus::Won {
            player: PlayerId::Player1,
            row: RowIndex::new(7).unwrap(),
        }
    );
    let cells: Vec<_> = game.history().iter().map(|r| r.cell.index()).collect();
    assert_eq!(cells, vec![0, 1, 2, 3, 4, 5, 6]);
}

/// Same seed, same session; successive games draw from different streams.
#[test]
fn test_seeded_sessions_replay() {
    let config = SessionConfig::computer_vs_computer().with_seed(77);
    let mut a = TurnController::new(config.clone());
    let mut b = TurnController::new(config);

    let mut games = Vec::new();
    for _ in 0..5 {
        a.run_computer_turns();
        b.run_computer_turns();
        assert_eq!(a.history(), b.history());
        games.push(a.history().clone());
        a.reset();
        b.reset();
    }

    assert!(games.windows(2).any(|w| w[0] != w[1]));
}

/// Rejections report why, and the legality query agrees with them.
#[test]
fn test_rejection_reasons() {
    let mut game = TurnController::new(SessionConfig::human_vs_human());
    game.submit_move(0);

    assert!(!game.is_legal_move(0));
    assert_eq!(
        game.try_submit_move(0),
        Err(MoveError::Occupied { cell: Cell::new(0).unwrap() })
    );
    assert!(!game.is_legal_move(9));
    assert_eq!(game.try_submit_move(9), Err(MoveError::OutOfRange { index: 9 }));
    assert!(game.is_legal_move(1));
    assert_eq!(game.current_player(), PlayerId::Player2);
}
