//! Tests for move history and time travel.

use strictly_timetravel::{
    Action, GameState, GameStatus, MoveError, Player, Position, Square, view,
};

fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(GameState::new(), |game, &i| {
        let pos = Position::try_from(i).expect("index in range");
        game.apply_move(pos).expect("legal move")
    })
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 4, 1, 5, 2]);

    let line = match game.status() {
        GameStatus::Won(line) => line,
        other => panic!("Expected a win, got {:?}", other),
    };
    assert_eq!(line.player(), Player::X);
    assert_eq!(
        line.cells(),
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_full_board_draw() {
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.current_step(), 9);
}

#[test]
fn test_rejections_leave_state_unchanged() {
    let game = play(&[0, 4, 1, 5, 2]);

    assert_eq!(
        game.apply_move(Position::BottomLeft),
        Err(MoveError::GameDecided(Player::X))
    );
    assert_eq!(
        game.reduce(Action::JumpTo(6)),
        Err(MoveError::StepOutOfRange { step: 6, len: 6 })
    );
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_step(), 5);

    let earlier = game.jump_to(2).expect("step in range");
    assert_eq!(
        earlier.apply_move(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_jump_then_move_truncates() {
    let game = play(&[0, 4, 1, 5, 2]);
    let branched = game
        .jump_to(2)
        .and_then(|g| g.apply_move(Position::BottomRight))
        .expect("legal branch");

    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.current_step(), 3);
    assert_eq!(&branched.history()[..3], &game.history()[..3]);
    assert_eq!(
        branched.board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(branched.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_jumping_back_into_decided_game_allows_play() {
    let game = play(&[0, 4, 1, 5, 2]);
    let rewound = game.jump_to(4).expect("step in range");
    assert_eq!(rewound.status(), GameStatus::InProgress(Player::X));
    let replayed = rewound
        .apply_move(Position::BottomLeft)
        .expect("legal move");
    assert_eq!(replayed.history().len(), 6);
    assert!(replayed.winner().is_none());
}

#[test]
fn test_toggle_order_twice_is_identity() {
    let game = play(&[0, 4]).jump_to(1).expect("step in range");
    let twice = game
        .reduce(Action::ToggleOrder)
        .and_then(|g| g.reduce(Action::ToggleOrder))
        .expect("toggle never fails");
    assert_eq!(twice, game);
}

#[test]
fn test_move_list_follows_order_flag() {
    let game = play(&[4, 0, 8]);

    let descending: Vec<usize> = view::move_list(&game).iter().map(|e| *e.step()).collect();
    assert_eq!(descending, vec![3, 2, 1, 0]);

    let ascending = game.toggle_order();
    let entries = view::move_list(&ascending);
    assert_eq!(entries.len(), ascending.history().len());
    assert_eq!(entries[0].label(), "Go to game start");
    assert_eq!(entries[3].label(), "Go to move #3 (col: 3, row: 3)");
    assert_eq!(ascending.history(), game.history());
}
