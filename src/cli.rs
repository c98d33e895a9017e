//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, global = true, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// List moves oldest first (overrides the settings file)
        #[arg(long)]
        ascending: bool,
    },

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Cell indices 0-8 in row-major order, played alternately by X and O
        moves: Vec<usize>,

        /// Jump to this history step after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Flip the move list order after playing the moves
        #[arg(long)]
        toggle_order: bool,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
