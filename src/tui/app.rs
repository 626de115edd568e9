//! Application state and logic.

use tictac_engine::Position;
use tracing::{debug, instrument};

use crate::{Controller, Settings};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a cell (click or keypad digit).
    Select(Position),
    /// Play at the cursor.
    SelectCursor,
    /// Move the cursor by a row/column step.
    MoveCursor {
        /// Row step.
        d_row: isize,
        /// Column step.
        d_col: isize,
    },
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    cursor: Position,
    show_hints: bool,
    running: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: Controller::new(),
            cursor: Position::Center,
            show_hints: *settings.show_hints(),
            running: true,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their keypad number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// False once the player has quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Outcome message when the game is over, otherwise whose turn it is.
    pub fn status(&self) -> String {
        self.controller
            .message()
            .unwrap_or_else(|| format!("{} to move", self.controller.current_player()))
    }

    /// Applies a player action. Invalid moves are ignored.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Select(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::SelectCursor => self.play(self.cursor),
            Action::MoveCursor { d_row, d_col } => {
                if let Some(pos) = self.cursor.offset(d_row, d_col) {
                    self.cursor = pos;
                }
            }
            Action::Reset => {
                if self.controller.can_reset() {
                    self.controller.reset();
                    self.cursor = Position::Center;
                }
            }
            Action::Quit => self.running = false,
        }
    }

    fn play(&mut self, pos: Position) {
        if let Err(e) = self.controller.select_position(pos) {
            debug!(position = %pos, error = %e, "Ignoring move");
        }
    }
}
