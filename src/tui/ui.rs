//! Stateless UI rendering for tic-tac-toe.
//!
//! The screen is a pure function of [`App`]. [`ScreenLayout`] is shared by
//! the renderer and the mouse hit test so clicks land on what was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::games::tictactoe::{Player, Position, Square, view};

use super::app::{App, ClickTarget, Focus};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Screen regions for one terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Key help under the board.
    pub help: Rect,
    /// Status line.
    pub status: Rect,
    /// Order toggle control.
    pub toggle: Rect,
    /// Move list (including its border).
    pub moves: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into the game regions.
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(30)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(9),    // Board
                Constraint::Length(3), // Help
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Status
                Constraint::Length(3), // Order toggle
                Constraint::Min(3),    // Move list
            ])
            .split(columns[1]);

        let board = center_rect(left[1], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT); 3])
            .split(board);

        let mut cells = [Rect::default(); 9];
        for (r, row) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); 3])
                .split(*row);
            for (c, cell) in cols.iter().enumerate() {
                cells[r * 3 + c] = *cell;
            }
        }

        Self {
            title: left[0],
            cells,
            help: left[2],
            status: right[0],
            toggle: right[1],
            moves: right[2],
        }
    }

    /// Maps a mouse click to the element under it.
    ///
    /// `entries` is the number of move list rows currently shown.
    pub fn hit_test(&self, column: u16, row: u16, entries: usize) -> Option<ClickTarget> {
        let point = ScreenPosition::new(column, row);

        if let Some(index) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Position::from_index(index).map(ClickTarget::Cell);
        }

        if self.toggle.contains(point) {
            return Some(ClickTarget::OrderToggle);
        }

        let list = Block::default().borders(Borders::ALL).inner(self.moves);
        if list.contains(point) {
            let offset = usize::from(row - list.y);
            if offset < entries {
                return Some(ClickTarget::MoveRow(offset));
            }
        }

        None
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.state();

    let title = Paragraph::new("Strictly Games - Time Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    let highlighted = view::highlighted(game);
    for (pos, area) in Position::ALL.iter().zip(layout.cells.iter()) {
        let is_cursor = app.focus() == Focus::Board && *pos == app.cursor();
        draw_cell(
            frame,
            *area,
            game.board().get(*pos),
            *pos,
            highlighted.contains(pos),
            is_cursor,
        );
    }

    let help = Paragraph::new("arrows move  enter/1-9 place  tab history\no order  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    draw_status(frame, layout.status, app);
    draw_toggle(frame, layout.toggle, game.ascending());
    draw_moves(frame, layout.moves, app);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    is_highlighted: bool,
    is_cursor: bool,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if is_highlighted {
        style = style.bg(Color::Green);
    }
    if is_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        app.state().status().to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    if let Some(message) = app.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let status =
        Paragraph::new(lines).block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_toggle(frame: &mut Frame, area: Rect, ascending: bool) {
    let order = if ascending { "ascending" } else { "descending" };
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("[ {} ]", view::ORDER_TOGGLE_LABEL),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}", order)),
    ]))
    .block(Block::default().title("Order (o)").borders(Borders::ALL));
    frame.render_widget(toggle, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let list_focused = app.focus() == Focus::MoveList;
    let items: Vec<ListItem> = view::move_list(app.state())
        .into_iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = Style::default();
            if *entry.is_current() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if list_focused && *entry.step() == app.selected_step() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{:>2}. {}", row + 1, entry.label())).style(style)
        })
        .collect();

    let border = if list_focused { Color::Cyan } else { Color::Reset };
    let list = List::new(items).block(
        Block::default()
            .title("History (tab)")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new(&Settings::default());
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1 (col: 2, row: 2)"));
        assert!(screen.contains(view::ORDER_TOGGLE_LABEL));
    }

    #[test]
    fn test_rows_numbered_by_display_position() {
        let mut app = App::new(&Settings::default());
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains(" 1. Go to move #1"));
        assert!(screen.contains(" 2. Go to game start"));
    }

    #[test]
    fn test_hit_test_matches_cells() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 90, 24));
        for (i, cell) in layout.cells.iter().enumerate() {
            assert_eq!(
                layout.hit_test(cell.x + 1, cell.y + 1, 1),
                Position::from_index(i).map(ClickTarget::Cell)
            );
        }
        assert_eq!(
            layout.hit_test(layout.toggle.x + 2, layout.toggle.y + 1, 1),
            Some(ClickTarget::OrderToggle)
        );
    }

    #[test]
    fn test_hit_test_move_rows() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 90, 24));
        let x = layout.moves.x + 3;
        let first = layout.moves.y + 1;
        assert_eq!(layout.hit_test(x, first, 2), Some(ClickTarget::MoveRow(0)));
        assert_eq!(layout.hit_test(x, first + 1, 2), Some(ClickTarget::MoveRow(1)));
        assert_eq!(layout.hit_test(x, first + 2, 2), None);
    }
}
