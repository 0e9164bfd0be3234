//! Terminal lifecycle and event loop.
//!
//! The only module with side effects. One event is read, mapped to at
//! most one [`Action`](crate::input::Action), applied to the [`App`], and
//! the screen is redrawn before the next event is read.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::error::TuiError;
use crate::input::{map_key, map_mouse};
use crate::theme::Theme;
use crate::ui::{self, ScreenLayout};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored on every exit path, including panics.
#[instrument(skip(theme))]
pub fn run(theme: Theme, mouse: bool) -> Result<(), TuiError> {
    info!("Starting Tic Tac Toe TUI");

    install_panic_hook(mouse);
    let mut terminal = setup_terminal(mouse)?;

    let result = event_loop(&mut terminal, App::new(), &theme);

    restore_terminal(mouse)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "Event loop error");
    }
    result
}

fn event_loop(terminal: &mut Term, mut app: App, theme: &Theme) -> Result<(), TuiError> {
    let mut layout = ScreenLayout::default();

    while app.is_running() {
        terminal.draw(|frame| {
            layout = ScreenLayout::compute(frame.area());
            ui::draw(frame, &app, theme, &layout);
        })?;

        let action = match event::read()? {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => map_mouse(mouse, &layout),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            app.apply(action);
        }
    }

    info!(score = %app.game().score(), "Session finished");
    Ok(())
}

/// Set up the terminal for TUI mode.
fn setup_terminal(mouse: bool) -> Result<Term, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal(mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, DisableMouseCapture)?;
    }
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook(mouse: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal(mouse);
        original_hook(panic_info);
    }));
}
