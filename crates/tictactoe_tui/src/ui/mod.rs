//! UI rendering using ratatui.
//!
//! Rendering is a pure function of [`App`] and [`Theme`]. The geometry
//! lives in [`ScreenLayout`] so the event loop can hit-test mouse clicks
//! against exactly what was drawn.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as TermPosition, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_game::{GameStatus, Player, Position};

use crate::app::App;
use crate::theme::Theme;

pub use board::render_board;

/// Width of one cell, separators excluded.
const CELL_WIDTH: u16 = 9;
/// Height of one cell, separators excluded.
const CELL_HEIGHT: u16 = 3;
/// Grid size including the two separators in each direction.
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// A clickable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// One of the nine cells.
    Cell(Position),
    /// The restart control.
    Restart,
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered frame around the grid.
    pub board: Rect,
    /// Grid area inside the board frame.
    pub grid: Rect,
    /// Cell rectangles in index order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Restart control.
    pub restart: Rect,
    /// Scoreboard.
    pub score: Rect,
    /// Key binding help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title
                Constraint::Min(GRID_HEIGHT + 2),    // Board
                Constraint::Length(3),               // Status
                Constraint::Length(3),               // Restart
                Constraint::Length(3),               // Score
                Constraint::Length(1),               // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], GRID_WIDTH + 2, GRID_HEIGHT + 2);
        let grid = Block::default().borders(Borders::ALL).inner(board);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title: chunks[0],
            board,
            grid,
            cells,
            status: chunks[2],
            restart: center_rect(chunks[3], 18, 3),
            score: center_rect(chunks[4], 36, 3),
            help: chunks[5],
        }
    }

    /// Region under the terminal coordinate, if clickable.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let point = TermPosition::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
            .map(Hit::Cell)
            .or_else(|| self.restart.contains(point).then_some(Hit::Restart))
    }
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme, layout: &ScreenLayout) {
    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    render_board(frame, layout, app, theme);

    let status = Paragraph::new(status_line(app, theme))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let restart = Paragraph::new("Restart Game")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.secondary)),
        );
    frame.render_widget(restart, layout.restart);

    let score = Paragraph::new(score_line(app, theme))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(score, layout.score);

    let help = Paragraph::new("1-9 or arrows + Enter: place mark | R: restart | Q: quit")
        .style(theme.muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn status_line(app: &App, theme: &Theme) -> Line<'static> {
    let game = app.game();
    let emphasis = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    match game.status() {
        GameStatus::Won(_) | GameStatus::Tied => {
            Line::from(Span::styled(game.status_text(), emphasis))
        }
        GameStatus::InProgress => {
            let player = game.state().current_player();
            Line::from(vec![
                Span::raw("Next move: "),
                Span::styled(player.label(), theme.mark(player)),
            ])
        }
    }
}

fn score_line(app: &App, theme: &Theme) -> Line<'static> {
    let score = app.game().score();
    Line::from(vec![
        Span::styled("X ", theme.mark(Player::X)),
        Span::raw(score.wins(Player::X).to_string()),
        Span::raw("    "),
        Span::styled("O ", theme.mark(Player::O)),
        Span::raw(score.wins(Player::O).to_string()),
        Span::raw("    "),
        Span::styled("Ties ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(score.ties().to_string()),
    ])
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
