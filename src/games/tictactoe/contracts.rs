//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::check_winner;
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The displayed board must not already have a winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with `GameDecided` if a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match check_winner(game.board()) {
            Some(line) => Err(MoveError::GameDecided(line.player())),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` if the cell is taken on the displayed board.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions (winner first, then occupancy):
/// - Displayed board has no winner
/// - Square is empty
///
/// Postconditions:
/// - Every step fills exactly one previously empty cell
/// - Marks alternate starting with X
/// - Displayed step is within history
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(*pos, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::new()
            .apply_move(Position::Center)
            .expect("legal move");
        assert!(matches!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_winner_checked_before_occupancy() {
        let game = [0, 4, 1, 5, 2]
            .into_iter()
            .filter_map(Position::from_index)
            .try_fold(GameState::new(), |g, pos| g.apply_move(pos))
            .expect("legal game");
        // TopLeft is both occupied and on a decided board.
        assert_eq!(
            MoveContract::pre(&game, &Position::TopLeft),
            Err(MoveError::GameDecided(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = before.apply_move(Position::Center).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.apply_move(Position::Center).expect("legal move");

        // Fill a second cell in the same step.
        let mut board = after.history[1].board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        after.history[1] = crate::games::tictactoe::Move::new(board, Some(Position::Center));

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
