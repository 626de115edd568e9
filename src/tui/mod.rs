//! Terminal UI.
//!
//! One synchronous loop: draw, wait for an event, apply it.

mod app;
mod input;
mod ui;

pub use app::{Action, App};
pub use input::{key_action, mouse_action};
pub use ui::{board_layout, cell_at, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use tracing::{debug, info, instrument, warn};

use crate::Settings;

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = match setup_terminal(*settings.mouse()) {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore_err) = restore_terminal(&mut io::stdout()) {
                warn!(error = %restore_err, "Failed to restore terminal");
            }
            return Err(e.into());
        }
    };

    let res = run_app(&mut terminal, App::new(settings));

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    info!("TUI closed");
    res
}

fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Safe to call when only part of the setup happened.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| draw(f, &app))?;

        let action = match event::read()? {
            Event::Key(key) => key_action(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                mouse_action(mouse, Rect::new(0, 0, size.width, size.height))
            }
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "Input");
            app.handle(action);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_setup_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?1000l"), "{written:?}");
    }
}
