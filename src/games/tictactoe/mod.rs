//! Tic-tac-toe with move history and time travel.

mod action;
mod contracts;
mod position;
mod state;
mod status;
mod types;

pub mod invariants;
pub mod rules;
pub mod view;

pub use action::{Action, Move, MoveError};
pub use contracts::{Contract, GameUndecided, MoveContract, SquareIsEmpty};
pub use position::Position;
pub use state::GameState;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
