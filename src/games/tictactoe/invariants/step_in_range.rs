//! Displayed step invariant: the viewed snapshot exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: history starts with the empty board and the displayed step
/// indexes into it.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        let starts_empty = game
            .history()
            .first()
            .is_some_and(|start| start.position().is_none() && start.board().occupied() == 0);

        starts_empty && game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "History starts at an empty board and the displayed step is recorded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = GameState::new();
        game.current_step = 1;
        assert!(!StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_missing_start_violates() {
        let mut game = GameState::new()
            .apply_move(Position::Center)
            .expect("legal move");
        game.history.remove(0);
        game.current_step = 0;
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
