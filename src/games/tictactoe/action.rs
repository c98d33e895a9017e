//! First-class action and history-entry types for tic-tac-toe.
//!
//! Actions are the player's intent and can be validated independently of
//! execution. Moves are the recorded snapshots that make up the history.

use super::rules::{WinningLine, check_winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent routed through [`GameState::reduce`](super::GameState::reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the active player's mark at a position.
    Place(Position),
    /// View the board as it was after the given number of plies.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ToggleOrder,
}

/// One history snapshot: the board after a ply and the cell that ply filled.
///
/// The initial empty board has no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    board: Board,
    position: Option<Position>,
}

impl Move {
    /// The game-start snapshot.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position filled by this ply, `None` for game start.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the 1-indexed `(column, row)` of the filled cell.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.position.map(|pos| (pos.column(), pos.row()))
    }

    /// Returns the completed line on this snapshot, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(&self.board)
    }
}

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameDecided(Player),

    /// A history step outside the recorded range was requested.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
