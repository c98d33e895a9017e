//! Alternating marks invariant: X and O take turns, X first.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the cell filled at step k holds X for odd k and O for even k.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, mov)| match mov.position() {
                Some(pos) => mov.board().get(pos) == Square::Occupied(Player::for_step(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate marks starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Move, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::new()
            .apply_move(Position::Center)
            .and_then(|g| g.apply_move(Position::TopLeft))
            .and_then(|g| g.apply_move(Position::BottomRight))
            .expect("legal moves");
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = GameState::new();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        game.history.push(Move::new(board, Some(Position::Center)));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
