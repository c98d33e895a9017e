//! Game state with move history and time travel.
//!
//! `GameState` is an immutable value. Every transition borrows the current
//! state and returns a new one, so a rejected action leaves the caller's
//! state exactly as it was.

use super::action::{Action, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{WinningLine, check_winner, is_draw};
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: history, displayed step and list order.
///
/// Deserialized values are rejected unless every history invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    /// Snapshots from game start; never empty.
    pub(super) history: Vec<Move>,
    /// Index of the displayed snapshot.
    pub(super) current_step: usize,
    /// Move list display order.
    pub(super) ascending: bool,
}

/// Unchecked wire shape of [`GameState`].
#[derive(Deserialize)]
struct GameStateRecord {
    history: Vec<Move>,
    current_step: usize,
    ascending: bool,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = MoveError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            current_step: record.current_step,
            ascending: record.ascending,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game with only the empty board in history.
    ///
    /// The move list starts in descending order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::start()],
            current_step: 0,
            ascending: false,
        }
    }

    /// Sets the initial move list order.
    pub fn with_order(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Returns the full history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the displayed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns true if the move list is shown in ascending order.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &Move {
        // current_step < history.len() is upheld by construction, transitions and deserialization.
        &self.history[self.current_step]
    }

    /// Returns the displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns true if the displayed step is the most recent ply.
    pub fn is_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Returns the player who moves from the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        check_winner(self.board())
    }

    /// Derives the status of the displayed board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winner() {
            GameStatus::Won(line)
        } else if is_draw(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Places the active player's mark on the displayed board.
    ///
    /// Any history after the displayed step is discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameDecided` if the displayed board already has a
    /// winner, or `MoveError::SquareOccupied` if the cell is taken.
    #[instrument(skip(self), fields(step = self.current_step, position = ?pos))]
    pub fn apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        MoveContract::pre(self, &pos)?;

        let player = self.next_player();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));

        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(Move::new(board, Some(pos)));

        let next = Self {
            current_step: history.len() - 1,
            history,
            ascending: self.ascending,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(
            %player,
            discarded,
            step = next.current_step,
            "Move applied"
        );
        Ok(next)
    }

    /// Displays the board as it was after `step` plies.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::StepOutOfRange` if `step` is not in history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_step, to = step, "Jumping to step");
        Ok(Self {
            current_step: step,
            ..self.clone()
        })
    }

    /// Flips the move list order. History and displayed step are untouched.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_order(&self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self.clone()
        }
    }

    /// Applies an action, returning the next state.
    pub fn reduce(&self, action: Action) -> Result<Self, MoveError> {
        match action {
            Action::Place(pos) => self.apply_move(pos),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ToggleOrder => Ok(self.toggle_order()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
