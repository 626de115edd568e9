//! Maps terminal events to actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictac_engine::Position;

use super::app::Action;
use super::ui::cell_at;

/// Translates a key press.
///
/// Digits 1-9 play that keypad cell, arrows move the cursor, Enter or
/// Space play at the cursor.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::SelectCursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Position::from_keypad)
            .map(Action::Select),
        KeyCode::Up => Some(Action::MoveCursor { d_row: -1, d_col: 0 }),
        KeyCode::Down => Some(Action::MoveCursor { d_row: 1, d_col: 0 }),
        KeyCode::Left => Some(Action::MoveCursor { d_row: 0, d_col: -1 }),
        KeyCode::Right => Some(Action::MoveCursor { d_row: 0, d_col: 1 }),
        _ => None,
    }
}

/// Translates a left click inside a board cell into a move there.
///
/// `area` is the full frame the board was drawn in.
pub fn mouse_action(mouse: MouseEvent, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            cell_at(area, mouse.column, mouse.row).map(Action::Select)
        }
        _ => None,
    }
}
