//! Derived game status.

use super::Player;
use super::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// Status of the displayed board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line is complete.
    Won(WinningLine),
    /// The board is full with no line complete.
    Draw,
    /// Game is ongoing; holds the player to move.
    InProgress(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player()),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player()),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress(player) => write!(f, "Next player: {}", player),
        }
    }
}
