//! Tests for move history and jumping through it.

use retrace_tictactoe::{GameController, MoveError, Player, Position, Square, Status};

fn play(game: &mut GameController, moves: &[usize]) {
    for &index in moves {
        game.attempt_move(index).unwrap();
    }
}

fn assert_turn_flag(game: &GameController) {
    assert_eq!(game.x_is_next(), game.step_number() % 2 == 0);
    assert!(game.step_number() < game.history().len());
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    assert_eq!(game.history().len(), 6);
    assert_eq!(game.step_number(), 5);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_then_branch_discards_future() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    let kept: Vec<_> = game.history().snapshots()[..=2].to_vec();

    game.jump_to(2).unwrap();
    assert_eq!(game.step_number(), 2);
    assert!(game.x_is_next());
    assert_eq!(game.status().to_string(), "Next player: X");
    let board = game.current().board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(board.occupied(), 2);
    // Jumping alone never truncates.
    assert_eq!(game.history().len(), 6);

    assert_eq!(game.attempt_move(6), Ok(Player::X));
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step_number(), 3);
    assert_eq!(&game.history().snapshots()[..=2], kept.as_slice());
    assert_eq!(
        game.current().board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.current().board().get(Position::TopCenter), Square::Empty);
}

#[test]
fn test_branch_length_is_step_plus_two() {
    for k in 0..=5 {
        let mut game = GameController::new();
        play(&mut game, &[0, 4, 1, 3, 2]);
        game.jump_to(k).unwrap();
        let free = Position::ALL
            .into_iter()
            .find(|p| game.current().board().is_empty(*p))
            .unwrap();
        if game.winner().is_none() {
            game.attempt_move(free.to_index()).unwrap();
            assert_eq!(game.history().len(), k + 2, "jump to {k}");
        }
        assert_turn_flag(&game);
    }
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    let before = game.clone();

    for index in 0..9 {
        assert!(game.attempt_move(index).is_err());
        assert_eq!(game.history().len(), before.history().len());
        assert_eq!(game.step_number(), before.step_number());
    }
    assert_eq!(
        game.attempt_move(8),
        Err(MoveError::GameWon { winner: Player::X })
    );
    // Browsing a won game is still allowed.
    game.jump_to(0).unwrap();
    assert_eq!(game.status().to_string(), "Next player: X");
}

#[test]
fn test_occupied_after_jump_is_rejected() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 8]);
    game.jump_to(1).unwrap();
    let len = game.history().len();

    assert_eq!(
        game.attempt_move(0),
        Err(MoveError::SquareOccupied {
            position: Position::TopLeft
        })
    );
    assert_eq!(game.history().len(), len);
    assert_eq!(game.step_number(), 1);
}

#[test]
fn test_turn_flag_tracks_cursor_through_mixed_operations() {
    let mut game = GameController::new();
    let script: &[(bool, usize)] = &[
        (true, 4),
        (true, 4),
        (true, 0),
        (false, 1),
        (true, 8),
        (true, 9),
        (false, 0),
        (true, 2),
        (false, 7),
        (true, 6),
        (true, 3),
        (false, 2),
    ];
    for &(is_move, value) in script {
        if is_move {
            let _ = game.attempt_move(value);
        } else {
            let _ = game.jump_to(value);
        }
        assert_turn_flag(&game);
    }
}

#[test]
fn test_snapshots_are_never_mutated() {
    let mut game = GameController::new();
    play(&mut game, &[4]);
    let captured = *game.current();

    play(&mut game, &[0, 8]);
    game.jump_to(1).unwrap();
    play(&mut game, &[2]);

    assert_eq!(game.history().get(1), Some(&captured));
    assert_eq!(captured.board().occupied(), 1);
}

#[test]
fn test_status_serializes_for_reports() {
    let mut game = GameController::new();
    play(&mut game, &[0]);
    let json = serde_json::to_value(game.status()).unwrap();
    assert_eq!(json, serde_json::json!({ "NextPlayer": "O" }));
}
