//! Read-only projections of [`GameState`] for renderers.
//!
//! Nothing here mutates state; the terminal UI and the `replay` command
//! both paint from these values.

use super::action::Move;
use super::state::GameState;
use super::{Board, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Label of the move list order control.
pub const ORDER_TOGGLE_LABEL: &str = "ASC <--> DESC";

/// One selectable row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// True for the displayed step.
    is_current: bool,
}

/// Describes a history entry: "Go to game start" or
/// "Go to move #k (col: x, row: y)".
pub fn describe(step: usize, mov: &Move) -> String {
    match mov.coordinates() {
        Some((col, row)) if step > 0 => {
            format!("Go to move #{} (col: {}, row: {})", step, col, row)
        }
        _ => "Go to game start".to_string(),
    }
}

/// Builds the move list in display order.
///
/// Ascending order lists game start first; descending reverses the list
/// without touching history.
#[instrument(skip(game), fields(len = game.history().len(), ascending = game.ascending()))]
pub fn move_list(game: &GameState) -> Vec<MoveListEntry> {
    let mut entries: Vec<MoveListEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, mov)| MoveListEntry {
            step,
            label: describe(step, mov),
            is_current: step == game.current_step(),
        })
        .collect();

    if !game.ascending() {
        entries.reverse();
    }
    entries
}

/// Cells to highlight on the displayed board (the winning line, if any).
pub fn highlighted(game: &GameState) -> Vec<Position> {
    game.winner()
        .map(|line| line.cells().to_vec())
        .unwrap_or_default()
}

/// Serializable summary of a game, as printed by `replay --json`.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    /// Displayed board.
    pub board: Board,
    /// Status line text.
    pub status: String,
    /// Displayed step.
    pub current_step: usize,
    /// Number of history entries.
    pub history_len: usize,
    /// Move list order.
    pub ascending: bool,
    /// Winning cell indices on the displayed board.
    pub winning_line: Vec<usize>,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        Self {
            board: game.board().clone(),
            status: game.status().to_string(),
            current_step: game.current_step(),
            history_len: game.history().len(),
            ascending: game.ascending(),
            winning_line: highlighted(game).into_iter().map(Position::to_index).collect(),
            moves: move_list(game),
        }
    }
}
