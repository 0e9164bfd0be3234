//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_game::{Cell, Position};

use super::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use crate::app::App;
use crate::theme::Theme;

/// Renders the framed 3x3 grid.
///
/// The frame title carries the label of the cell under the cursor.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, app: &App, theme: &Theme) {
    let cursor = app.cursor();
    let cell = app.game().state().board().get(cursor);
    let outline = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted())
        .title(format!(" {}: {} ", cursor.label(), cell.label()));
    f.render_widget(outline, layout.board);

    // Vertical separators first; the horizontal ones draw the crossings.
    for col in 1..3u16 {
        let x = layout.grid.x + col * (CELL_WIDTH + 1) - 1;
        let area = Rect::new(x, layout.grid.y, 1, layout.grid.height).intersection(layout.grid);
        render_vertical_sep(f, area, theme);
    }
    for row in 1..3u16 {
        let y = layout.grid.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(layout.grid.x, y, layout.grid.width, 1).intersection(layout.grid);
        render_separator(f, area, theme);
    }

    for pos in Position::ALL {
        render_cell(f, layout.cells[pos.to_index()], app, theme, pos);
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, theme: &Theme, pos: Position) {
    let state = app.game().state();
    let (text, mut style) = match state.board().get(pos) {
        Cell::Empty => ((pos.to_index() + 1).to_string(), theme.muted()),
        Cell::Marked(player) => (player.label().to_string(), theme.mark(player)),
    };

    let on_winning_line = state
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    if on_winning_line {
        style = style.patch(theme.highlight());
    } else if pos == app.cursor() && !state.game_over() {
        style = style.patch(theme.cursor());
    }

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::raw(text)),
        Line::default(),
    ])
    .style(style)
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut line = String::new();
    for x in 0..area.width {
        let on_column = x % (CELL_WIDTH + 1) == CELL_WIDTH;
        line.push(if on_column { '┼' } else { '─' });
    }
    f.render_widget(Paragraph::new(line).style(theme.muted()), area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![Line::from("│"); area.height as usize];
    f.render_widget(Paragraph::new(lines).style(theme.muted()), area);
}
