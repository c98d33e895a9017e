//! Strictly Timetravel - CLI
//!
//! Terminal tic-tac-toe with time travel, plus a headless replay mode.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_timetravel::{Action, GameState, Position, Settings, run_tui, view};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { ascending } => {
            let settings = if ascending {
                settings.with_ascending(true)
            } else {
                settings
            };
            run_tui(settings)
        }
        Command::Replay {
            moves,
            jump,
            toggle_order,
            json,
        } => run_replay(settings, moves, jump, toggle_order, json),
    }
}

/// Play the given cells in order and print the resulting game.
#[instrument(skip(settings))]
fn run_replay(
    settings: Settings,
    moves: Vec<usize>,
    jump: Option<usize>,
    toggle_order: bool,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");

    let mut game = GameState::new().with_order(*settings.ascending());
    for index in moves {
        let pos = Position::try_from(index)?;
        match game.reduce(Action::Place(pos)) {
            Ok(next) => game = next,
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                eprintln!("Skipping cell {}: {}", index, e);
            }
        }
    }

    if let Some(step) = jump {
        game = game.reduce(Action::JumpTo(step))?;
    }
    if toggle_order {
        game = game.reduce(Action::ToggleOrder)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view::GameSnapshot::from(&game))?);
    } else {
        println!("{}\n", game.board().display());
        println!("{}", game.status());
        println!("{}", view::ORDER_TOGGLE_LABEL);
        for entry in view::move_list(&game) {
            let marker = if *entry.is_current() { ">" } else { " " };
            println!("{} {}", marker, entry.label());
        }
    }

    Ok(())
}
