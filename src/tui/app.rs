//! Application state and logic.

use crate::config::Settings;
use crate::games::tictactoe::{Action, GameState, Position, view};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The history list.
    MoveList,
}

/// Something the user clicked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// The order toggle control.
    OrderToggle,
    /// A row of the move list, counted from the top in display order.
    MoveRow(usize),
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new().with_order(*settings.ascending()),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_step: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the history step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Gets the message from the last rejected action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an action to the game.
    ///
    /// A rejected action leaves the game untouched and sets the message line.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match self.state.reduce(action) {
            Ok(next) => {
                self.state = next;
                self.selected_step = self.state.current_step();
                self.message = None;
                debug!(status = %self.state.status(), "Action applied");
            }
            Err(e) => {
                debug!(error = %e, "Action rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('o') => self.dispatch(Action::ToggleOrder),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::MoveList,
                    Focus::MoveList => Focus::Board,
                };
                self.selected_step = self.state.current_step();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(Action::Place(pos));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.dispatch(Action::Place(self.cursor)),
                Focus::MoveList => self.dispatch(Action::JumpTo(self.selected_step)),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::MoveList => self.move_selection(key),
            },
            _ => {}
        }
    }

    /// Handles a left click on a screen element.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Cell(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Action::Place(pos));
            }
            ClickTarget::OrderToggle => self.dispatch(Action::ToggleOrder),
            ClickTarget::MoveRow(row) => {
                let entries = view::move_list(&self.state);
                if let Some(entry) = entries.get(row) {
                    self.focus = Focus::MoveList;
                    self.dispatch(Action::JumpTo(*entry.step()));
                }
            }
        }
    }

    /// Moves the list selection one row up or down in display order.
    fn move_selection(&mut self, key: KeyCode) {
        let entries = view::move_list(&self.state);
        let Some(row) = entries.iter().position(|e| *e.step() == self.selected_step) else {
            return;
        };
        let row = match key {
            KeyCode::Up => row.saturating_sub(1),
            KeyCode::Down => (row + 1).min(entries.len() - 1),
            _ => row,
        };
        if let Some(entry) = entries.get(row) {
            self.selected_step = *entry.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_digit_places_mark() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(
            app.state().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        let before = app.state().clone();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state(), &before);
        assert_eq!(app.message(), Some("Square Center is already occupied"));

        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_list_navigation_jumps() {
        let mut app = app();
        for c in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::MoveList);
        // Descending list: step 3 on top, Down walks toward game start.
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_step(), 1);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state().current_step(), 1);
        assert_eq!(app.state().history().len(), 4);
    }

    #[test]
    fn test_click_targets() {
        let mut app = app();
        app.handle_click(ClickTarget::Cell(Position::TopLeft));
        app.handle_click(ClickTarget::Cell(Position::TopRight));
        app.handle_click(ClickTarget::OrderToggle);
        assert!(app.state().ascending());

        // Ascending: row 0 is game start.
        app.handle_click(ClickTarget::MoveRow(0));
        assert_eq!(app.state().current_step(), 0);
        assert_eq!(app.focus(), Focus::MoveList);

        app.handle_click(ClickTarget::MoveRow(10));
        assert_eq!(app.state().current_step(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
