//! Single-cell step invariant: each ply fills exactly one empty cell.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: for every step k ≥ 1, the snapshot differs from step k-1 in
/// exactly one cell, that cell was empty before, and it is the recorded
/// position of step k.
pub struct SingleCellStepInvariant;

impl Invariant<GameState> for SingleCellStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => before.get(*pos) == Square::Empty && pair[1].position() == Some(*pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history step fills exactly one previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(SingleCellStepInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = [0, 1, 2, 4, 3, 5, 7, 6, 8]
            .into_iter()
            .filter_map(Position::from_index)
            .try_fold(GameState::new(), |g, pos| g.apply_move(pos))
            .expect("legal game");
        assert!(SingleCellStepInvariant::holds(&game));
        assert_eq!(game.history().len(), 10);
    }

    #[test]
    fn test_mismatched_position_violates() {
        let mut game = GameState::new()
            .apply_move(Position::Center)
            .expect("legal move");
        let board = game.history[1].board().clone();
        game.history[1] = Move::new(board, Some(Position::TopLeft));
        assert!(!SingleCellStepInvariant::holds(&game));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let mut game = GameState::new();
        game.history.push(Move::start());
        assert!(!SingleCellStepInvariant::holds(&game));

        let mut board = game.history[0].board().clone();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        game.history[1] = Move::new(board, Some(Position::Center));
        assert!(!SingleCellStepInvariant::holds(&game));
    }
}
