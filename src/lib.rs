//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! The game is an immutable [`GameState`] value driven by pure transitions:
//! placing a mark, jumping to an earlier step, and flipping the order of
//! the move list. A move made from an earlier step discards the moves that
//! followed it.
//!
//! # Architecture
//!
//! - **Games**: board types, win/draw rules, history state, contracts
//! - **View**: read-only projections (move list labels, highlights, snapshots)
//! - **TUI**: ratatui front end driven by keyboard and mouse
//! - **Config**: TOML settings
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameState, GameStatus, Player, Position};
//!
//! # fn main() -> Result<(), strictly_timetravel::MoveError> {
//! let game = GameState::new()
//!     .apply_move(Position::TopLeft)?
//!     .apply_move(Position::Center)?;
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! let rewound = game.jump_to(1)?;
//! assert_eq!(rewound.history().len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Terminal UI
pub use tui::{App, ClickTarget, Focus, ScreenLayout, draw, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, Contract, GameState, GameStatus, GameUndecided, Move, MoveContract, MoveError,
    Player, Position, Square, SquareIsEmpty,
};

// Crate-level exports - Rules, invariants and views
pub use games::tictactoe::{invariants, rules, view};
